//! folio-rs: content pipeline for an MDX-driven portfolio site
//!
//! Loads pages, projects, blog posts and Android write-ups from a content
//! directory, substitutes placeholder records synthesized from a style-guide
//! document when a file is missing, and assembles per-route page data for the
//! presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The main application context
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content store root
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Style-guide document used for fallback content
    pub style_guide: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Build from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let style_guide = base_dir.join(&config.style_guide);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            style_guide,
        }
    }

    /// Content loader bound to this site
    pub fn loader(&self) -> content::ContentLoader {
        content::ContentLoader::new(self)
    }

    /// Generate page data for every route
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
