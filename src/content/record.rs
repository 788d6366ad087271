//! Content records handed from the loader to page assembly

use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;

use super::FrontMatter;

/// A loaded (or synthesized) piece of content
///
/// Serializes as one flat object: the front-matter keys followed by `slug`
/// and `content`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    #[serde(flatten)]
    pub front_matter: FrontMatter,
    /// Filename-derived identifier, never taken from front-matter
    pub slug: String,
    /// Raw body text
    pub content: String,
}

impl ContentRecord {
    pub fn new(slug: impl Into<String>, mut front_matter: FrontMatter, content: impl Into<String>) -> Self {
        // These would shadow the record's own fields in the flattened output
        front_matter.extra.shift_remove("slug");
        front_matter.extra.shift_remove("content");

        Self {
            front_matter,
            slug: slug.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.front_matter.title.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.front_matter.date.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.front_matter.tags
    }

    /// `<field>_<lang>` when present, otherwise the plain field
    pub fn localized(&self, field: &str, lang: &str) -> Option<&str> {
        self.front_matter
            .get(&format!("{}_{}", field, lang))
            .or_else(|| self.front_matter.get(field))
    }

    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.front_matter.parse_date()
    }
}

/// Newest first. Records without a usable date come after every dated one;
/// equal dates fall back to slug order.
pub fn newest_first(a: &ContentRecord, b: &ContentRecord) -> Ordering {
    let by_date = match (a.parsed_date(), b.parsed_date()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.slug.cmp(&b.slug))
}
