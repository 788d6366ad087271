//! Page assembly - gathers the data each route needs and writes it out
//!
//! Every route becomes one JSON document under the public directory
//! (`/blog/foo` → `public/blog/foo/index.json`). The presentation layer reads
//! these documents; nothing here knows about markup beyond rendering
//! content bodies to HTML.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{ContentLoader, ContentRecord, ContentType, MarkdownRenderer};
use crate::helpers::full_url_for;
use crate::Folio;

/// Document-level metadata shared by every route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

/// The data handed to the presentation layer for one route
#[derive(Debug, Clone, Serialize)]
pub struct RoutePage {
    pub route: String,
    pub permalink: String,
    pub meta: PageMeta,
    pub data: Value,
}

/// Assembles page data for all routes of the site
pub struct Generator {
    folio: Folio,
    loader: ContentLoader,
    renderer: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Self {
        Self {
            folio: folio.clone(),
            loader: folio.loader(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Build the data for every route. Routes whose content resolves to
    /// nothing are left out.
    pub fn assemble(&self) -> Result<Vec<RoutePage>> {
        let global = self.loader.global_data()?;
        let global = global.as_ref();
        let meta = self.meta(global);

        let mut routes: Vec<(String, Value)> = Vec::new();

        if let Some(data) = self.home(global)? {
            routes.push(("/".to_string(), data));
        }
        if let Some(data) = self.about(global)? {
            routes.push(("/about".to_string(), data));
        }
        routes.push(("/projects".to_string(), self.listing(ContentType::Projects, global)?));
        routes.push(("/android".to_string(), self.listing(ContentType::Android, global)?));
        routes.push(("/blog".to_string(), self.blog()?));
        routes.push(("/contact".to_string(), merge(&[global])?));

        for kind in [ContentType::Blog, ContentType::Android] {
            for slug in self.loader.static_slugs(kind)? {
                match self.detail(kind, &slug)? {
                    Some(data) => routes.push((format!("/{}/{}", kind, slug), data)),
                    None => tracing::warn!("No content for /{}/{}, skipping route", kind, slug),
                }
            }
        }

        Ok(routes
            .into_iter()
            .map(|(route, data)| RoutePage {
                permalink: full_url_for(&self.folio.config, &route),
                meta: meta.clone(),
                route,
                data,
            })
            .collect())
    }

    /// Landing page: `home` overlaid with the global settings
    pub fn home(&self, global: Option<&ContentRecord>) -> Result<Option<Value>> {
        self.page_with_global("home", global)
    }

    pub fn about(&self, global: Option<&ContentRecord>) -> Result<Option<Value>> {
        self.page_with_global("about", global)
    }

    /// Listing of a content type with its intro page
    pub fn listing(&self, kind: ContentType, global: Option<&ContentRecord>) -> Result<Value> {
        let posts = self.loader.list_all(kind)?;
        let page = self.loader.page_data(kind.dir_name())?;

        let mut data = Map::new();
        data.insert("posts".to_string(), serde_json::to_value(&posts)?);
        data.insert("page".to_string(), merge(&[page.as_ref(), global])?);
        Ok(Value::Object(data))
    }

    /// Blog index: posts, intro page and the highlighted post
    pub fn blog(&self) -> Result<Value> {
        let posts = self.loader.list_all(ContentType::Blog)?;
        let page = self.loader.page_data("blog")?;

        let mut data = Map::new();
        data.insert("featured".to_string(), featured_slug(&posts).into());
        data.insert("posts".to_string(), serde_json::to_value(&posts)?);
        data.insert("page".to_string(), serde_json::to_value(&page)?);
        Ok(Value::Object(data))
    }

    /// One post with its body rendered
    pub fn detail(&self, kind: ContentType, slug: &str) -> Result<Option<Value>> {
        let Some(record) = self.loader.load(kind, slug)? else {
            return Ok(None);
        };

        let html = self.renderer.render(&record.content);
        let mut data = serde_json::to_value(&record)?;
        if let Value::Object(map) = &mut data {
            map.insert("html".to_string(), Value::String(html));
        }
        Ok(Some(data))
    }

    /// Write assembled pages below the public directory
    pub fn write(&self, pages: &[RoutePage]) -> Result<()> {
        for page in pages {
            let path = output_path(&self.folio.public_dir, &page.route);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(page)?;
            fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::debug!("Generated: {}", page.route);
        }
        Ok(())
    }

    fn page_with_global(&self, slug: &str, global: Option<&ContentRecord>) -> Result<Option<Value>> {
        match self.loader.page_data(slug)? {
            Some(page) => Ok(Some(merge(&[Some(&page), global])?)),
            None => Ok(None),
        }
    }

    fn meta(&self, global: Option<&ContentRecord>) -> PageMeta {
        let config = &self.folio.config;
        let name = global
            .and_then(|g| g.front_matter.name.as_deref())
            .unwrap_or(&config.author);

        PageMeta {
            title: format!("{} | Portfolio", name),
            description: config.description.clone(),
            lang: config.language.clone(),
        }
    }
}

/// Overlay records left to right into one object; later keys win
pub fn merge(layers: &[Option<&ContentRecord>]) -> Result<Value> {
    let mut merged = Map::new();
    for record in layers.iter().flatten() {
        if let Value::Object(map) = serde_json::to_value(record)? {
            merged.extend(map);
        }
    }
    Ok(Value::Object(merged))
}

/// The first post flagged `featured`, else the newest one
pub fn featured_slug(posts: &[ContentRecord]) -> Option<&str> {
    posts
        .iter()
        .find(|p| p.front_matter.featured == Some(true))
        .or_else(|| posts.first())
        .map(|p| p.slug.as_str())
}

/// Where a route's document lands
pub fn output_path(public_dir: &Path, route: &str) -> PathBuf {
    let clean = route.trim_matches('/');
    if clean.is_empty() {
        public_dir.join("index.json")
    } else {
        public_dir.join(clean).join("index.json")
    }
}
