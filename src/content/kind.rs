//! Content categories and their store directories

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::ContentError;

/// One subtree of the content store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Pages,
    Projects,
    Blog,
    Android,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Pages,
        ContentType::Projects,
        ContentType::Blog,
        ContentType::Android,
    ];

    /// Directory name under the content root
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentType::Pages => "pages",
            ContentType::Projects => "projects",
            ContentType::Blog => "blog",
            ContentType::Android => "android",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for ContentType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pages" | "page" => Ok(ContentType::Pages),
            "projects" | "project" => Ok(ContentType::Projects),
            "blog" | "post" | "posts" => Ok(ContentType::Blog),
            "android" => Ok(ContentType::Android),
            _ => Err(ContentError::UnknownType(s.to_string())),
        }
    }
}
