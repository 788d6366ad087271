//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// Locales that may appear as file suffixes (`slug.es.mdx`), in lookup order
    pub locales: Vec<String>,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Plain-text document used to synthesize content when a file is missing
    pub style_guide: String,

    // Writing
    pub content_ext: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "Full Stack Developer Portfolio".to_string(),
            author: "Giuseppe Tamayo C.".to_string(),
            language: "es".to_string(),
            locales: vec!["es".to_string(), "en".to_string()],

            url: "http://localhost:3000".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            style_guide: "ui-code-style-gtc.md".to_string(),

            content_ext: "mdx".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// First word of the author name, used in generated greetings
    pub fn author_first_name(&self) -> &str {
        self.author.split_whitespace().next().unwrap_or("")
    }
}
