//! Helper functions shared by page assembly and the CLI

mod url;

pub use url::*;
