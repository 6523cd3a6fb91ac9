//! Extraction of the prose in `<xs:annotation><xs:documentation>` blocks.
//!
//! Documentation is written inside indented XML, and authors escape markup that would otherwise
//! be parsed (`&lt;` for `<`, sometimes doubly escaped). The text handed to the emitters must
//! read as if it had been written flush-left in a plain text file.

use std::borrow::Cow;

use crate::node::SchemaNode;

/// Longest entity name (between `&` and `;`) that is looked up.
const MAX_ENTITY_LEN: usize = 32;

/// The normalized documentation of `node`, or `None` when the node has no annotation or the
/// annotation holds only whitespace.
pub fn extract(node: SchemaNode) -> Option<String> {
    let documentation = node.first_child("annotation")?.first_child("documentation")?;
    let text = normalize(&text_content(documentation));
    (!text.is_empty()).then_some(text)
}

/// All character data below `node`, concatenated in document order. Child element tags are
/// dropped; their text is kept.
pub fn text_content(node: SchemaNode) -> String {
    node.as_xml()
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Normalizes raw documentation text. Applying it to its own output changes nothing.
pub fn normalize(raw: &str) -> String {
    let text = raw.trim_start_matches('\n').trim_end();
    let text = dedent(text);
    unescape_entities(&text).trim_start().to_owned()
}

fn is_indent(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_blank(line: &str) -> bool {
    line.trim_start_matches(is_indent).is_empty()
}

fn leading_indent(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches(is_indent).len()]
}

fn common_prefix<'s>(a: &'s str, b: &'s str) -> &'s str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Removes the leading whitespace shared by every non-blank line. Lines holding only spaces and
/// tabs become empty.
pub fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(leading_indent)
        .reduce(common_prefix)
        .unwrap_or("");
    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolves character and entity references (XML, HTML5 and numeric). Anything that does not
/// form a known reference is kept as written.
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let resolved = reference_end(candidate).and_then(|end| {
            quick_xml::escape::unescape(&candidate[..=end])
                .ok()
                .map(|value| (value.into_owned(), end))
        });
        match resolved {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Byte offset of the `;` closing the reference that starts at `candidate[0] == '&'`.
fn reference_end(candidate: &str) -> Option<usize> {
    candidate
        .char_indices()
        .skip(1)
        .take(MAX_ENTITY_LEN + 1)
        .find_map(|(i, c)| match c {
            ';' if i > 1 => Some(Some(i)),
            c if c.is_ascii_alphanumeric() || c == '#' => None,
            _ => Some(None),
        })
        .flatten()
}
