use std::fmt;

use roxmltree::{Document, Node};

use crate::{documentation, path::SchemaPath, xstypes::QName, XSD_NAMESPACE};

/// The structural shapes the documentation engine knows how to describe. Every other XSD
/// construct is ignored by the emitters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    ComplexType,
    SimpleType,
    Group,
    Element,
    Attribute,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::ComplexType,
        Shape::SimpleType,
        Shape::Group,
        Shape::Element,
        Shape::Attribute,
    ];

    pub const fn local_name(self) -> &'static str {
        match self {
            Self::ComplexType => "complexType",
            Self::SimpleType => "simpleType",
            Self::Group => "group",
            Self::Element => "element",
            Self::Attribute => "attribute",
        }
    }

    /// Classifies `node` by its namespace-qualified tag. Returns `None` for anything outside
    /// the XSD namespace or outside the five recognized shapes.
    pub fn classify(node: SchemaNode) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shape| node.is_xsd(shape.local_name()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

/// Read-only view over one element of a parsed schema document.
///
/// The view is `Copy` and borrows the underlying [`Document`]; it is only ever held for the
/// duration of a single emission pass.
#[derive(Copy, Clone)]
pub struct SchemaNode<'a, 'input: 'a> {
    node: Node<'a, 'input>,
}

impl<'a, 'input: 'a> SchemaNode<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// The root `<xs:schema>` element of `document`.
    pub fn root(document: &'a Document<'input>) -> Self {
        Self::new(document.root_element())
    }

    pub fn as_xml(&self) -> Node<'a, 'input> {
        self.node
    }

    pub fn tag(&self) -> QName {
        QName::of(self.node)
    }

    pub fn local_name(&self) -> &str {
        self.node.tag_name().name()
    }

    /// Whether this node is the XSD element `<xs:{local_name}>`.
    pub fn is_xsd(&self, local_name: &str) -> bool {
        let tag = self.node.tag_name();
        self.node.is_element() && tag.namespace() == Some(XSD_NAMESPACE) && tag.name() == local_name
    }

    pub fn shape(&self) -> Option<Shape> {
        Shape::classify(*self)
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }

    /// The identity used to order and deduplicate siblings: the first non-empty value among the
    /// `name`, `ref` and `value` attributes.
    pub fn display_key(&self) -> Option<&'a str> {
        ["name", "ref", "value"]
            .into_iter()
            .filter_map(|attribute| self.attribute(attribute))
            .find(|value| !value.is_empty())
    }

    /// Element children, in document order.
    pub fn children(&self) -> impl Iterator<Item = SchemaNode<'a, 'input>> {
        self.node
            .children()
            .filter(|child| child.is_element())
            .map(SchemaNode::new)
    }

    /// The first `<xs:{local_name}>` child, if any.
    pub fn first_child(&self, local_name: &str) -> Option<SchemaNode<'a, 'input>> {
        self.children().find(|child| child.is_xsd(local_name))
    }

    pub fn select(&self, path: &SchemaPath) -> Vec<SchemaNode<'a, 'input>> {
        path.evaluate(*self)
    }

    /// Normalized annotation text, recomputed on every call.
    pub fn documentation(&self) -> Option<String> {
        documentation::extract(*self)
    }
}

impl fmt::Debug for SchemaNode<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_key() {
            Some(key) => write!(f, "<{} {key:?}>", self.tag()),
            None => write!(f, "<{}>", self.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"
                                     xmlns:nx="http://definition.nexusformat.org/nxdl/3.1">
        <xs:complexType name="fieldType"/>
        <xs:simpleType name="validItemName"/>
        <xs:group name="groupGroup"/>
        <xs:element name="definition"/>
        <xs:attribute name="units"/>
        <xs:attributeGroup name="common"/>
        <nx:element name="imposter"/>
        <xs:element ref="nx:group" name=""/>
        <xs:enumeration value="mm"/>
    </xs:schema>"#;

    fn children(document: &Document) -> Vec<(Option<Shape>, Option<String>)> {
        SchemaNode::root(document)
            .children()
            .map(|child| (child.shape(), child.display_key().map(str::to_string)))
            .collect()
    }

    #[test]
    fn classifies_the_five_shapes() {
        let document = Document::parse(SCHEMA).unwrap();
        let shapes: Vec<_> = children(&document).into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            shapes,
            vec![
                Some(Shape::ComplexType),
                Some(Shape::SimpleType),
                Some(Shape::Group),
                Some(Shape::Element),
                Some(Shape::Attribute),
                None,
                None,
                Some(Shape::Element),
                None,
            ]
        );
    }

    #[test]
    fn display_key_falls_back_past_empty_values() {
        let document = Document::parse(SCHEMA).unwrap();
        let keys: Vec<_> = children(&document).into_iter().map(|(_, k)| k).collect();
        assert_eq!(keys[4].as_deref(), Some("units"));
        assert_eq!(keys[7].as_deref(), Some("nx:group"));
        assert_eq!(keys[8].as_deref(), Some("mm"));
    }

    #[test]
    fn first_child_ignores_foreign_namespaces() {
        let document = Document::parse(SCHEMA).unwrap();
        let root = SchemaNode::root(&document);
        assert_eq!(root.first_child("element").and_then(|e| e.name()), Some("definition"));
        assert!(root.first_child("sequence").is_none());
    }
}
