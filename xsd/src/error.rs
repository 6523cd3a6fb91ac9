use thiserror::Error;

#[derive(Debug, Error)]
pub enum XsdError {
    #[error("schema is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid structural path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
    #[error("failed to resolve prefix {prefix:?} to a namespace URI")]
    UnboundPrefix { prefix: String },
    #[error("no schema node found at {path}")]
    MissingNode { path: String },
    #[error("duplicate schema entries under {path}: {}", .keys.join(", "))]
    DuplicateKeys { path: String, keys: Vec<String> },
}
