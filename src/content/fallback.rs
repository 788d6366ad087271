//! Fallback content synthesized from the style-guide document
//!
//! When a requested content file does not exist, the loader asks the
//! [`FallbackResolver`] for a stand-in. The resolver scrapes a plain-text
//! style guide (a CV-like document with `Summary`, `Skills`, `Projects` and
//! `Certifications` sections) for a summary and skill lists, and builds a
//! placeholder record for the requested type.
//!
//! Extraction is keyword based. A reworded heading yields an empty field and
//! a warning, never an error.

use chrono::{SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ContentRecord, ContentType, FrontMatter};

lazy_static! {
    static ref SUMMARY: Regex = Regex::new(r"(?i)Summary\s+([\s\S]*?)Skills").unwrap();
    static ref LANGUAGES: Regex = section("Lenguajes y Tecnologías");
    static ref DATABASES: Regex = section("Bases de Datos");
    static ref FUNCTIONAL: Regex = section("Dominio Funcional");
}

/// A labeled section running up to the next blank line
fn section(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?i){}\s+([\s\S]*?)(?:\n\n|\r\n\r\n)",
        regex::escape(label)
    ))
    .unwrap()
}

/// Skill lists scraped from the style guide
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub databases: Vec<String>,
    pub functional: Vec<String>,
}

/// Everything the fallback path knows about the site owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleGuide {
    pub summary: String,
    pub skills: Skills,
    /// Section labels that could not be found in the document
    #[serde(skip)]
    pub missing: Vec<&'static str>,
}

impl StyleGuide {
    /// Read and parse the document at `path`.
    ///
    /// An absent or unreadable document gives an empty guide.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!("Style guide not found at {:?}", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(text) => {
                let guide = Self::parse(&text);
                for label in &guide.missing {
                    tracing::warn!("Style guide {:?} has no `{}` section", path, label);
                }
                guide
            }
            Err(e) => {
                tracing::warn!("Failed to read style guide {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Extract the summary and skill sections from the document text
    pub fn parse(text: &str) -> Self {
        let mut missing = Vec::new();

        let summary = match capture(&SUMMARY, text) {
            Some(s) => s.trim().to_string(),
            None => {
                missing.push("Summary");
                String::new()
            }
        };

        let mut list = |re: &Regex, label: &'static str| match capture(re, text) {
            Some(s) => split_list(s),
            None => {
                missing.push(label);
                Vec::new()
            }
        };

        let skills = Skills {
            languages: list(&LANGUAGES, "Lenguajes y Tecnologías"),
            databases: list(&DATABASES, "Bases de Datos"),
            functional: list(&FUNCTIONAL, "Dominio Funcional"),
        };

        Self {
            summary,
            skills,
            missing,
        }
    }
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Comma-separated list, trimmed, blanks dropped
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds placeholder records for content that has no file
#[derive(Debug, Clone)]
pub struct FallbackResolver {
    style_guide: PathBuf,
    author: String,
}

impl FallbackResolver {
    pub fn new(style_guide: impl Into<PathBuf>) -> Self {
        Self {
            style_guide: style_guide.into(),
            author: "Giuseppe".to_string(),
        }
    }

    /// Name used in the generated home page greeting
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Parse the style guide afresh
    pub fn style_guide(&self) -> StyleGuide {
        StyleGuide::load(&self.style_guide)
    }

    /// Synthesize a record for `kind`/`slug`, or `None` when the type has no
    /// fallback. The returned slug is the requested one (empty if none).
    pub fn resolve(&self, kind: ContentType, slug: Option<&str>) -> Option<ContentRecord> {
        let record_slug = slug.unwrap_or_default();

        match kind {
            ContentType::Pages if slug == Some("home") => {
                let guide = self.style_guide();
                let skills = guide
                    .skills
                    .languages
                    .iter()
                    .map(|s| format!("- {}", s))
                    .collect::<Vec<_>>()
                    .join("\n");
                let body = format!(
                    "\n# Hola, soy {}\n\n{}\n\n## Mis Habilidades\n\n{}\n",
                    self.author, guide.summary, skills
                );
                let fm = FrontMatter {
                    title: Some("Home".to_string()),
                    ..Default::default()
                };
                Some(ContentRecord::new(record_slug, fm, body))
            }
            ContentType::Projects => {
                let named = slug.map(|s| s.replace('-', " "));
                let title = named
                    .clone()
                    .unwrap_or_else(|| "Proyecto en construcción".to_string());
                let heading = named.unwrap_or_else(|| "Próximamente".to_string());
                let fm = FrontMatter {
                    title: Some(title),
                    description: Some(
                        "La información detallada de este proyecto se está actualizando."
                            .to_string(),
                    ),
                    date: Some(now_iso()),
                    tags: vec!["En construcción".to_string()],
                    ..Default::default()
                };
                let body = format!(
                    "\n# {}\n\nEste detalle de proyecto se encuentra actualmente en redacción. Revisa mi perfil para más información.\n",
                    heading
                );
                Some(ContentRecord::new(record_slug, fm, body))
            }
            ContentType::Blog => {
                let fm = FrontMatter {
                    title: Some("Artículo en redacción".to_string()),
                    description: Some("Este contenido estará disponible pronto.".to_string()),
                    date: Some(now_iso()),
                    tags: vec!["Blog".to_string()],
                    ..Default::default()
                };
                let body = "\n# Próximamente\n\nEstamos preparando contenido interesante para este blog. ¡Vuelve pronto!\n";
                Some(ContentRecord::new(record_slug, fm, body))
            }
            _ => None,
        }
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
