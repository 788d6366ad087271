//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the content store
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Malformed front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown content type: {0}. Available: pages, projects, blog, android")]
    UnknownType(String),
}

/// Structural problems in a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("opening `---` has no closing delimiter")]
    Unterminated,

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ContentError>;
