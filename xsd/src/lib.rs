//! Read-only access to NXDL schema documents: structural paths, shape classification, ordered
//! sibling selection and documentation extraction.

pub mod documentation;
pub mod error;
pub mod node;
pub mod path;
pub mod select;
pub mod xstypes;

pub use error::XsdError;
pub use node::{SchemaNode, Shape};
pub use path::SchemaPath;
pub use select::{select_ordered, Selection};
pub use xstypes::QName;

pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Parses schema source text. The returned document borrows `text`.
pub fn parse_schema(text: &str, allow_dtd: bool) -> Result<roxmltree::Document<'_>, XsdError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd,
        ..roxmltree::ParsingOptions::default()
    };
    Ok(roxmltree::Document::parse_with_options(text, options)?)
}
