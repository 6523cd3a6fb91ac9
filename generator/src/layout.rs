//! The hand-curated layout of the NXDL chapter.
//!
//! The order of the data-type sections is chosen for the reader and does not follow the order
//! of declarations in `nxdl.xsd`, so it is listed here explicitly.

use crate::rst::HeadingStyle;

/// One entry of the element overview at the start of the chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementEntry {
    pub name: String,
    pub description: String,
}

impl ElementEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ManualLayout {
    pub element_preamble: String,
    /// Emitted sorted by name, whatever order they are listed in.
    pub elements: Vec<ElementEntry>,
    pub data_type_preamble: String,
    /// Absolute schema locations, emitted in exactly this order.
    pub data_types: Vec<String>,
    pub data_type_postamble: String,
    pub headings: HeadingStyle,
    /// One level of indentation in documentation and constraint blocks.
    pub indentation: String,
}

impl ManualLayout {
    /// A layout with no prose and no sections; fields are filled in by the caller.
    pub fn empty() -> Self {
        Self {
            element_preamble: String::new(),
            elements: Vec::new(),
            data_type_preamble: String::new(),
            data_types: Vec::new(),
            data_type_postamble: String::new(),
            headings: HeadingStyle::default(),
            indentation: " ".repeat(4),
        }
    }

    /// The layout of the NXDL chapter in the NeXus manual.
    pub fn nexus() -> Self {
        Self {
            element_preamble: ELEMENT_PREAMBLE.to_owned(),
            elements: NEXUS_ELEMENTS
                .iter()
                .map(|(name, description)| ElementEntry::new(*name, *description))
                .collect(),
            data_type_preamble: DATA_TYPE_PREAMBLE.to_owned(),
            data_types: NEXUS_DATA_TYPES.iter().map(|s| (*s).to_owned()).collect(),
            data_type_postamble: DATA_TYPE_POSTAMBLE.to_owned(),
            ..Self::empty()
        }
    }
}

impl Default for ManualLayout {
    fn default() -> Self {
        Self::nexus()
    }
}

const NEXUS_DATA_TYPES: &[&str] = &[
    "/xs:schema/xs:complexType[@name='attributeType']",
    "/xs:schema/xs:element[@name='definition']",
    "/xs:schema/xs:complexType[@name='definitionType']",
    "/xs:schema/xs:simpleType[@name='definitionTypeAttr']",
    "/xs:schema/xs:complexType[@name='dimensionsType']",
    "/xs:schema/xs:complexType[@name='docType']",
    "/xs:schema/xs:complexType[@name='enumerationType']",
    "/xs:schema/xs:complexType[@name='fieldType']",
    "/xs:schema/xs:complexType[@name='choiceType']",
    "/xs:schema/xs:complexType[@name='groupType']",
    "/xs:schema/xs:complexType[@name='linkType']",
    "/xs:schema/xs:complexType[@name='symbolsType']",
    "/xs:schema/xs:complexType[@name='basicComponent']",
    "/xs:schema/xs:simpleType[@name='validItemName']",
    "/xs:schema/xs:simpleType[@name='validNXClassName']",
    "/xs:schema/xs:simpleType[@name='validTargetName']",
    "/xs:schema/xs:simpleType[@name='nonNegativeUnbounded']",
];

const NEXUS_ELEMENTS: &[(&str, &str)] = &[
    (
        "attribute",
        "An ``attribute`` element can *only* be a child of a
``field`` or ``group`` element.
It is used to define *attribute* elements to be used and their data types
and possibly an enumeration of allowed values.

For more details, see:
:ref:`NXDL.data.type.attributeType`",
    ),
    (
        "definition",
        "A ``definition`` element can *only* be used
at the root level of an NXDL specification.
Note:  Due to the large number of attributes of the ``definition`` element,
they have been omitted from the figure below.

For more details, see:
:ref:`NXDL.data.type.definition`,
:ref:`NXDL.data.type.definitionType`, and
:ref:`NXDL.data.type.definitionTypeAttr`",
    ),
    (
        "dimensions",
        "The ``dimensions`` element describes the *shape* of an array.
It is used *only* as a child of a ``field`` element.

For more details, see:
:ref:`NXDL.data.type.dimensionsType`",
    ),
    (
        "doc",
        "A ``doc`` element can be a child of most NXDL elements.  In most cases, the
content of the ``doc`` element will also become part of the NeXus manual.

:element: {any}:

In documentation, it may be useful to
use an element that is not directly specified by the NXDL language.
The *any* element here says that one can use any element
at all in a ``doc`` element and NXDL will not process it but pass it through.

For more details, see:
:ref:`NXDL.data.type.docType`",
    ),
    (
        "enumeration",
        "An ``enumeration`` element can *only* be a child of a
``field`` or ``attribute`` element.
It is used to restrict the available choices to a predefined list,
such as to control varieties in spelling of a controversial word (such as
*metre* vs. *meter*).

For more details, see:
:ref:`NXDL.data.type.enumerationType`",
    ),
    (
        "field",
        "The ``field`` element provides the value of a named item.  Many different attributes
are available to further define the ``field``.  Some of the attributes are not
allowed to be used together (such as ``axes`` and ``axis``); see the documentation
of each for details.
It is used *only* as a child of a ``group`` element.

For more details, see:
:ref:`NXDL.data.type.fieldType`",
    ),
    (
        "choice",
        "A ``choice`` element is used when a named group might take one
of several possible NeXus base classes.  Logically, it must
have at least two group children.

For more details, see:
:ref:`NXDL.data.type.choiceType`",
    ),
    (
        "group",
        "A ``group`` element can *only* be a child of a
``definition`` or ``group`` element.
It describes a common level of organization in a NeXus data file, similar
to a subdirectory in a file directory tree.

For more details, see:
:ref:`NXDL.data.type.groupType`",
    ),
    (
        "link",
        ".. index::
    single: link target

A ``link`` element can *only* be a child of a
``definition``,
``field``, or ``group`` element.
It describes the path to the original source of the parent
``definition``,
``field``, or ``group``.

For more details, see:
:ref:`NXDL.data.type.linkType`",
    ),
    (
        "symbols",
        "A ``symbols`` element can *only* be a child of a ``definition`` element.
It defines the array index symbols to be used when defining arrays as
``field`` elements with common dimensions and lengths.

For more details, see:
:ref:`NXDL.data.type.symbolsType`",
    ),
];

const ELEMENT_PREAMBLE: &str = r#"
=============================
NXDL Elements and Field Types
=============================

The documentation in this section has been obtained directly
from the NXDL Schema file:  *nxdl.xsd*.
First, the basic elements are defined in alphabetical order.
Attributes to an element are indicated immediately following the element
and are preceded with an "@" symbol, such as
**@attribute**.
Then, the common data types used within the NXDL specification are defined.
Pay particular attention to the rules for *validItemName*
and  *validNXClassName*.

..
    This chapter is laid out by hand: the element overview and the order of the
    data type sections below are fixed in the generator. New items in nxdl.xsd
    do not appear here until they are added to that list.

.. index::
    see:attribute; NXDL attribute
    ! single: NXDL elements

.. _NXDL.elements:

NXDL Elements
=============
"#;

const DATA_TYPE_PREAMBLE: &str = r#"

.. _NXDL.data.types.internal:

NXDL Field Types (internal)
===========================

Field types that define the NXDL language are described here.
These data types are defined in the XSD Schema (``nxdl.xsd``)
and are used in various parts of the Schema to define common structures
or to simplify a complicated entry.  While the data types are not intended for
use in NXDL specifications, they define structures that may be used in NXDL specifications.
"#;

const DATA_TYPE_POSTAMBLE: &str = r#"
**The** ``xs:string`` **data type**
    The ``xs:string`` data type can contain characters,
    line feeds, carriage returns, and tab characters.
    See https://www.w3schools.com/xml/schema_dtypes_string.asp
    for more details.

**The** ``xs:token`` **data type**
    The ``xs:string`` data type is derived from the
    ``xs:string`` data type.

    The ``xs:token`` data type also contains characters,
    but the XML processor will remove line feeds, carriage returns, tabs,
    leading and trailing spaces, and multiple spaces.
    See https://www.w3schools.com/xml/schema_dtypes_string.asp
    for more details.
"#;
