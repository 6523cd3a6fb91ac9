//! Emitters turning classified schema nodes into reStructuredText.
//!
//! The general emitter documents one structural node and recurses into the structures nested
//! below it; restrictions and enumeration values have emitters of their own. All output goes to
//! the [`RstDocument`] passed into each call.

use lazy_static::lazy_static;
use nxdl_xsd::{select_ordered, SchemaNode, SchemaPath, Shape};
use tracing::trace;

use crate::{
    error::GenerateError,
    rst::{HeadingStyle, RstDocument},
};

lazy_static! {
    static ref ATTRIBUTES: SchemaPath = SchemaPath::relative(&["attribute"]);
    static ref INLINE_ENUMERATIONS: SchemaPath =
        SchemaPath::relative(&["simpleType", "restriction", "enumeration"]);
    static ref INLINE_RESTRICTIONS: SchemaPath =
        SchemaPath::relative(&["simpleType", "restriction"]);
    static ref SEQUENCE_ELEMENTS: SchemaPath = SchemaPath::relative(&["sequence", "element"]);
    static ref SEQUENCE_GROUPS: SchemaPath = SchemaPath::relative(&["sequence", "group"]);
    static ref PATTERNS: SchemaPath = SchemaPath::relative(&["pattern"]);
    static ref ENUMERATIONS: SchemaPath = SchemaPath::relative(&["enumeration"]);

    /// Structures documented one level down, each group in display-key order.
    static ref NESTED: [SchemaPath; 7] = [
        SchemaPath::relative(&["simpleType"]),
        SchemaPath::relative(&["complexType"]),
        SchemaPath::relative(&["complexType", "attribute"]),
        SchemaPath::relative(&["complexContent", "extension", "attribute"]),
        SchemaPath::relative(&["complexType", "sequence", "attribute"]),
        SchemaPath::relative(&["complexType", "sequence", "element"]),
        SchemaPath::relative(&["complexContent", "extension", "sequence", "element"]),
    ];
}

pub struct NodeEmitter<'l> {
    headings: &'l HeadingStyle,
    indentation: &'l str,
}

impl<'l> NodeEmitter<'l> {
    pub fn new(headings: &'l HeadingStyle, indentation: &'l str) -> Self {
        Self {
            headings,
            indentation,
        }
    }

    fn indent(&self, level: usize) -> String {
        self.indentation.repeat(level)
    }

    pub fn title(
        &self,
        out: &mut RstDocument,
        title: &str,
        level: usize,
    ) -> Result<(), GenerateError> {
        self.headings.print_title(out, title, level)
    }

    /// Documents a complex type, simple type, group, element or attribute. Nodes of any other
    /// shape, and nodes without a `name`, produce no output.
    pub fn general(
        &self,
        out: &mut RstDocument,
        node: SchemaNode,
        level: usize,
    ) -> Result<(), GenerateError> {
        let Some(shape) = node.shape() else {
            return Ok(());
        };
        let Some(name) = node.name() else {
            trace!(?node, "skipping unnamed node");
            return Ok(());
        };
        let (title, anchored) = match shape {
            Shape::Attribute => (format!("@{name}"), false),
            Shape::ComplexType | Shape::SimpleType | Shape::Group | Shape::Element => {
                (name.to_owned(), level == 0)
            }
        };
        trace!(%shape, title = %title, level, "emitting");

        if anchored {
            out.print(&format!(".. index:: ! {title} (NXDL data type)\n"));
            out.print(&format!("\n.. _NXDL.data.type.{title}:\n"));
        }
        self.title(out, &title, level)?;
        self.documentation(out, node, level);

        let attributes = select_ordered(node, &ATTRIBUTES)?;
        if !attributes.is_empty() {
            self.title(out, &format!("Attributes of {title}"), level + 1)?;
            for attribute in attributes.keyed() {
                self.general(out, attribute, level + 1)?;
            }
        }

        if let Some(restriction) = node.first_child("restriction") {
            self.restriction(out, restriction, level + 1)?;
        }

        if !INLINE_ENUMERATIONS.evaluate(node).is_empty() {
            let restrictions = select_ordered(node, &INLINE_RESTRICTIONS)?;
            for restriction in restrictions.all() {
                self.restriction(out, restriction, level + 1)?;
            }
        }

        let elements = select_ordered(node, &SEQUENCE_ELEMENTS)?;
        if !elements.is_empty() {
            self.title(out, &format!("Elements of {title}"), level + 1)?;
            for element in elements.keyed() {
                self.general(out, element, level + 1)?;
            }
        }

        if let Some(group) = SEQUENCE_GROUPS.evaluate(node).first() {
            self.title(out, &format!("Groups under {title}"), level + 1)?;
            self.documentation(out, *group, level + 1);
        }

        for path in NESTED.iter() {
            let nested = select_ordered(node, path)?;
            for child in nested.keyed() {
                self.general(out, child, level + 1)?;
            }
        }
        Ok(())
    }

    /// Describes the values a `<xs:restriction>` allows: a pattern if there is one, otherwise
    /// the enumerated values in source order, otherwise the base type.
    pub fn restriction(
        &self,
        out: &mut RstDocument,
        node: SchemaNode,
        level: usize,
    ) -> Result<(), GenerateError> {
        if !node.is_xsd("restriction") {
            return Ok(());
        }
        let indent = self.indent(level);
        let base = node.attribute("base").unwrap_or_default();

        self.documentation(out, node, level);
        out.print("\n");
        out.print(&format!("{indent}The value may be any"));

        let patterns = PATTERNS.evaluate(node);
        let enumerations = ENUMERATIONS.evaluate(node);
        if let Some(pattern) = patterns.first() {
            out.print(&format!(
                "{indent}``{base}`` that *also* matches the regular expression::\n"
            ));
            out.print(&format!(
                "{indent}{}{}",
                self.indentation,
                pattern.attribute("value").unwrap_or_default()
            ));
        } else if !enumerations.is_empty() {
            out.print(&format!("{indent}one from this list only:\n"));
            for enumeration in enumerations {
                self.enumeration(out, enumeration, level);
            }
            out.blank();
        } else {
            out.print(&format!("@{base}"));
        }
        out.print("\n");
        Ok(())
    }

    /// One bullet for an `<xs:enumeration>` value, followed by its documentation.
    pub fn enumeration(&self, out: &mut RstDocument, node: SchemaNode, level: usize) {
        if !node.is_xsd("enumeration") {
            return;
        }
        let value = node.attribute("value").unwrap_or_default();
        out.print(&format!("{}* ``{value}``", self.indent(level)));
        self.documentation(out, node, level);
    }

    /// The node's documentation between blank lines, indented to `level`.
    pub fn documentation(&self, out: &mut RstDocument, node: SchemaNode, level: usize) {
        if let Some(docs) = node.documentation() {
            let indent = self.indent(level);
            out.print("\n");
            out.print_indented(&indent, &docs);
            out.print("\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nxdl_xsd::{parse_schema, XsdError};

    fn schema(body: &str) -> String {
        format!(r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">{body}</xs:schema>"#)
    }

    fn emit(body: &str) -> Result<Vec<String>, GenerateError> {
        let text = schema(body);
        let document = parse_schema(&text, false)?;
        let root = SchemaNode::root(&document);
        let headings = HeadingStyle::default();
        let emitter = NodeEmitter::new(&headings, "    ");
        let mut out = RstDocument::new();
        for child in root.children() {
            emitter.general(&mut out, child, 0)?;
        }
        Ok(out.into_lines())
    }

    fn position(lines: &[String], wanted: &str) -> usize {
        lines
            .iter()
            .position(|line| line == wanted)
            .unwrap_or_else(|| panic!("{wanted:?} not found in {lines:#?}"))
    }

    #[test]
    fn attributes_then_enumerated_restriction_in_source_order() {
        let lines = emit(
            r#"<xs:complexType name="foo">
                 <xs:attribute name="units"/>
                 <xs:restriction base="xs:string">
                   <xs:enumeration value="mm"/>
                   <xs:enumeration value="m"/>
                 </xs:restriction>
               </xs:complexType>"#,
        )
        .unwrap();

        let title = position(&lines, "foo");
        assert_eq!(lines[title + 1], "---");
        let attributes = position(&lines, "Attributes of foo");
        assert_eq!(lines[attributes + 1], "+++++++++++++++++");
        let units = position(&lines, "@units");
        assert_eq!(lines[units + 1], "++++++");
        let list = position(&lines, "    one from this list only:");
        let mm = position(&lines, "    * ``mm``");
        let m = position(&lines, "    * ``m``");
        assert!(title < attributes && attributes < units && units < list);
        assert!(list < mm && mm < m, "enumeration order must follow the source");
    }

    #[test]
    fn level_zero_types_get_index_and_anchor() {
        let lines = emit(r#"<xs:simpleType name="validItemName"/>"#).unwrap();
        assert_eq!(
            &lines[..5],
            [
                ".. index:: ! validItemName (NXDL data type)",
                "",
                "",
                ".. _NXDL.data.type.validItemName:",
                "",
            ]
        );
        assert_eq!(lines[5], "validItemName");
    }

    #[test]
    fn attributes_at_level_zero_are_prefixed_and_unanchored() {
        let lines = emit(r#"<xs:attribute name="version"/>"#).unwrap();
        assert_eq!(lines, ["@version", "--------", ""]);
    }

    #[test]
    fn unnamed_and_unknown_nodes_emit_nothing() {
        let lines = emit(
            r#"<xs:complexType>
                 <xs:attribute name="hidden"/>
               </xs:complexType>
               <xs:attributeGroup name="common"/>
               <xs:element ref="definition"/>"#,
        )
        .unwrap();
        assert!(lines.is_empty(), "{lines:#?}");
    }

    #[test]
    fn pattern_takes_precedence_over_enumeration() {
        let lines = emit(
            r#"<xs:simpleType name="validItemName">
                 <xs:restriction base="xs:token">
                   <xs:pattern value="^[a-zA-Z0-9_]+$"/>
                   <xs:enumeration value="entry"/>
                 </xs:restriction>
               </xs:simpleType>"#,
        )
        .unwrap();
        let any = position(&lines, "    The value may be any");
        assert_eq!(
            lines[any + 1],
            "    ``xs:token`` that *also* matches the regular expression::"
        );
        assert_eq!(lines[any + 3], "        ^[a-zA-Z0-9_]+$");
        assert!(!lines.iter().any(|l| l.contains("one from this list only")));
        assert!(!lines.iter().any(|l| l.contains("``entry``")));
    }

    #[test]
    fn bare_restriction_refers_to_its_base() {
        let lines = emit(
            r#"<xs:simpleType name="validTargetName">
                 <xs:restriction base="nx:validItemName"/>
               </xs:simpleType>"#,
        )
        .unwrap();
        let any = position(&lines, "    The value may be any");
        assert_eq!(lines[any + 1], "@nx:validItemName");
    }

    #[test]
    fn inline_enumerations_are_listed_with_their_docs() {
        let lines = emit(
            r#"<xs:complexType name="fieldType">
                 <xs:attribute name="signal">
                   <xs:simpleType>
                     <xs:restriction base="xs:string">
                       <xs:enumeration value="1">
                         <xs:annotation><xs:documentation>plottable</xs:documentation></xs:annotation>
                       </xs:enumeration>
                     </xs:restriction>
                   </xs:simpleType>
                 </xs:attribute>
               </xs:complexType>"#,
        )
        .unwrap();
        let signal = position(&lines, "@signal");
        let bullet = position(&lines, "        * ``1``");
        let docs = position(&lines, "        plottable");
        assert!(signal < bullet && bullet < docs);
    }

    #[test]
    fn sequence_elements_are_sorted_and_groups_only_documented() {
        let lines = emit(
            r#"<xs:complexType name="groupType">
                 <xs:sequence>
                   <xs:element name="field"/>
                   <xs:element name="doc"/>
                   <xs:group ref="groupGroup">
                     <xs:annotation><xs:documentation>Nested groups.</xs:documentation></xs:annotation>
                   </xs:group>
                 </xs:sequence>
               </xs:complexType>"#,
        )
        .unwrap();
        let elements = position(&lines, "Elements of groupType");
        let doc = position(&lines, "doc");
        let field = position(&lines, "field");
        let groups = position(&lines, "Groups under groupType");
        let docs = position(&lines, "    Nested groups.");
        assert!(elements < doc && doc < field && field < groups && groups < docs);
        assert!(!lines.iter().any(|l| l == "groupGroup"));
    }

    #[test]
    fn extension_attributes_are_nested() {
        let lines = emit(
            r#"<xs:complexType name="fieldType">
                 <xs:complexContent>
                   <xs:extension base="nx:basicComponent">
                     <xs:attribute name="units"/>
                     <xs:attribute name="axis"/>
                   </xs:extension>
                 </xs:complexContent>
               </xs:complexType>"#,
        )
        .unwrap();
        let axis = position(&lines, "@axis");
        let units = position(&lines, "@units");
        assert!(axis < units);
        assert_eq!(lines[axis + 1], "+++++");
    }

    #[test]
    fn duplicate_elements_abort_the_pass() {
        let err = emit(
            r#"<xs:complexType name="fieldType">
                 <xs:sequence>
                   <xs:element name="value"/>
                   <xs:element name="value"/>
                 </xs:sequence>
               </xs:complexType>"#,
        )
        .unwrap_err();
        match err {
            GenerateError::Xsd(XsdError::DuplicateKeys { keys, .. }) => {
                assert_eq!(keys, vec!["value"])
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nesting_deeper_than_the_symbol_table_fails() {
        let mut body = String::new();
        for depth in 0..7 {
            body.push_str(&format!(r#"<xs:complexType name="level{depth}">"#));
        }
        body.push_str(&"</xs:complexType>".repeat(7));
        let err = emit(&body).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::HeadingTooDeep { depth: 6, levels: 6 }
        ));
    }
}
