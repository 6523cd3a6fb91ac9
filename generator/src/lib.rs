//! Generation of the "NXDL Elements and Field Types" chapter of the NeXus manual from the NXDL
//! schema (`nxdl.xsd`).
//!
//! One pass parses the schema, walks the configured sections and returns the chapter as a
//! sequence of reStructuredText lines. A pass either succeeds completely or returns an error;
//! no partial output is handed back.

pub mod emitter;
pub mod error;
pub mod figures;
pub mod layout;
pub mod manual;
pub mod rst;

use std::path::Path;

use nxdl_xsd::SchemaNode;

pub use error::{GenerateError, SchemaParseError};
pub use figures::{FigureLocator, NoFigures, SphinxFigures};
pub use layout::{ElementEntry, ManualLayout};
pub use rst::{HeadingStyle, RstDocument};

#[derive(Copy, Clone, Debug, Default)]
pub struct GenerateOptions {
    /// Allow a DTD in the schema document.
    pub allow_dtd: bool,
}

/// Runs one pass over schema source text.
pub fn generate(
    schema: &str,
    layout: &ManualLayout,
    figures: &dyn FigureLocator,
    options: GenerateOptions,
) -> Result<RstDocument, GenerateError> {
    let document = nxdl_xsd::parse_schema(schema, options.allow_dtd)?;
    manual::assemble(SchemaNode::root(&document), layout, figures)
}

/// Reads `path` and runs one pass over it. Every failure is reported as a
/// [`SchemaParseError`] naming the file.
pub fn generate_file(
    path: impl AsRef<Path>,
    layout: &ManualLayout,
    figures: &dyn FigureLocator,
    options: GenerateOptions,
) -> Result<RstDocument, SchemaParseError> {
    let path = path.as_ref();
    tracing::info!(file = %path.display(), "generating NXDL chapter");
    std::fs::read_to_string(path)
        .map_err(GenerateError::from)
        .and_then(|schema| generate(&schema, layout, figures, options))
        .map_err(|source| SchemaParseError {
            file: path.to_path_buf(),
            source,
        })
}
