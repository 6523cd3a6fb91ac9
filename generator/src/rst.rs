use crate::error::GenerateError;

/// Append-only sequence of reStructuredText lines produced by one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RstDocument {
    lines: Vec<String>,
}

impl RstDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` followed by a line break. Every `\n` inside `text` starts a new line, so
    /// `print("title\n")` yields the line `title` and an empty line. Lines holding only
    /// whitespace are stored empty.
    pub fn print(&mut self, text: &str) {
        for line in text.split('\n') {
            if line.trim().is_empty() {
                self.lines.push(String::new());
            } else {
                self.lines.push(line.to_owned());
            }
        }
    }

    /// Appends each line of `text` prefixed with `indent`.
    pub fn print_indented(&mut self, indent: &str, text: &str) {
        for line in text.split('\n') {
            self.print(&format!("{indent}{line}"));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The document as one string, each line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Section underline symbols, indexed by heading depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingStyle {
    markers: Vec<char>,
}

impl HeadingStyle {
    pub fn new(markers: impl Into<Vec<char>>) -> Self {
        Self {
            markers: markers.into(),
        }
    }

    pub fn levels(&self) -> usize {
        self.markers.len()
    }

    pub fn marker(&self, depth: usize) -> Result<char, GenerateError> {
        self.markers
            .get(depth)
            .copied()
            .ok_or(GenerateError::HeadingTooDeep {
                depth,
                levels: self.markers.len(),
            })
    }

    /// The underline for `title` at `depth`: one symbol per character of the title.
    pub fn underline(&self, title: &str, depth: usize) -> Result<String, GenerateError> {
        let marker = self.marker(depth)?;
        Ok(std::iter::repeat(marker)
            .take(title.chars().count())
            .collect())
    }

    /// Appends `title`, its underline and an empty line.
    pub fn print_title(
        &self,
        out: &mut RstDocument,
        title: &str,
        depth: usize,
    ) -> Result<(), GenerateError> {
        let underline = self.underline(title, depth)?;
        out.print(title);
        out.print(&format!("{underline}\n"));
        Ok(())
    }
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self::new(['-', '+', '~', '^', '*', '@'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_splits_embedded_line_breaks() {
        let mut doc = RstDocument::new();
        doc.print("\n.. Xpath = /xs:schema\n");
        doc.print("    ");
        assert_eq!(doc.lines(), ["", ".. Xpath = /xs:schema", "", ""]);
        assert_eq!(doc.render(), "\n.. Xpath = /xs:schema\n\n\n");
    }

    #[test]
    fn print_indented_prefixes_every_line() {
        let mut doc = RstDocument::new();
        doc.print_indented("    ", "first\n\nsecond");
        assert_eq!(doc.lines(), ["    first", "", "    second"]);
    }

    #[test]
    fn underline_matches_title_length() {
        let style = HeadingStyle::default();
        assert_eq!(style.underline("@units", 1).unwrap(), "++++++");
        assert_eq!(style.underline("Ångström", 0).unwrap(), "--------");
    }

    #[test]
    fn title_is_followed_by_underline_and_blank_line() {
        let mut doc = RstDocument::new();
        HeadingStyle::default()
            .print_title(&mut doc, "fieldType", 2)
            .unwrap();
        assert_eq!(doc.lines(), ["fieldType", "~~~~~~~~~", ""]);
    }

    #[test]
    fn depth_beyond_the_symbol_table_fails() {
        let style = HeadingStyle::default();
        assert_eq!(style.levels(), 6);
        assert_eq!(style.marker(5).unwrap(), '@');
        assert!(matches!(
            style.underline("deep", 6),
            Err(GenerateError::HeadingTooDeep {
                depth: 6,
                levels: 6
            })
        ));
    }
}
