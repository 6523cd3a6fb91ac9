use std::path::PathBuf;

use nxdl_xsd::XsdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Xsd(#[from] XsdError),
    #[error("heading depth {depth} exceeds the {levels} configured underline symbols")]
    HeadingTooDeep { depth: usize, levels: usize },
    #[error("failed to read the schema: {0}")]
    Io(#[from] std::io::Error),
}

/// The single error kind returned for a failed pass over a schema file.
#[derive(Debug, Error)]
#[error("failed to parse NXDL schema {}: {source}", .file.display())]
pub struct SchemaParseError {
    pub file: PathBuf,
    #[source]
    pub source: GenerateError,
}
