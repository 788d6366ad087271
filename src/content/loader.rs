//! Content loader - resolves records from the content store

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::record::newest_first;
use super::{ContentError, ContentRecord, ContentType, FallbackResolver, FrontMatter, Result};
use crate::Folio;

/// File extensions recognized as content, in lookup order
pub const CONTENT_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Loads content records by type and slug, falling back to synthesized
/// placeholders when a file is missing
#[derive(Debug, Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    locales: Vec<String>,
    fallback: FallbackResolver,
}

impl ContentLoader {
    /// Create a loader for a site
    pub fn new(folio: &Folio) -> Self {
        let fallback = FallbackResolver::new(&folio.style_guide)
            .with_author(folio.config.author_first_name());
        Self::with_store(&folio.content_dir, fallback).with_locales(folio.config.locales.clone())
    }

    /// Create a loader over an arbitrary content root
    pub fn with_store<P: AsRef<Path>>(content_dir: P, fallback: FallbackResolver) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            locales: vec!["es".to_string(), "en".to_string()],
            fallback,
        }
    }

    /// Locale suffixes accepted in file names, in lookup order
    pub fn with_locales(mut self, locales: Vec<String>) -> Self {
        self.locales = locales;
        self
    }

    pub fn fallback(&self) -> &FallbackResolver {
        &self.fallback
    }

    /// Directory holding one content type
    pub fn type_dir(&self, kind: ContentType) -> PathBuf {
        self.content_dir.join(kind.dir_name())
    }

    /// File names directly under a type's directory, sorted
    pub fn files(&self, kind: ContentType) -> Result<Vec<String>> {
        let dir = self.type_dir(kind);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ContentError::Io {
                path: dir.clone(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    files.push(name.to_string());
                }
            }
        }

        Ok(files)
    }

    /// Distinct slugs of the content files of a type. Localized variants
    /// (`post.es.mdx`) collapse onto their base slug.
    pub fn static_slugs(&self, kind: ContentType) -> Result<Vec<String>> {
        let slugs: BTreeSet<String> = self
            .files(kind)?
            .iter()
            .filter_map(|name| self.slug_from_filename(name))
            .collect();
        Ok(slugs.into_iter().collect())
    }

    /// Load one record.
    ///
    /// Returns the parsed file when one exists for the slug, otherwise the
    /// fallback for the type, otherwise `None`. Only a broken file is an error.
    pub fn load(&self, kind: ContentType, slug: &str) -> Result<Option<ContentRecord>> {
        let real_slug = strip_content_extension(slug);

        let Some(path) = self.find_file(kind, real_slug) else {
            let record = self.fallback.resolve(kind, Some(real_slug));
            match &record {
                Some(_) => tracing::debug!("No file for {}/{}, using fallback", kind, real_slug),
                None => tracing::debug!("No content for {}/{}", kind, real_slug),
            }
            return Ok(record.map(|mut r| {
                r.slug = real_slug.to_string();
                r
            }));
        };

        tracing::debug!("Loading {:?}", path);
        load_file(&path, real_slug).map(Some)
    }

    /// Load every record of a type, newest first
    pub fn list_all(&self, kind: ContentType) -> Result<Vec<ContentRecord>> {
        let mut records = Vec::new();
        for slug in self.static_slugs(kind)? {
            if let Some(record) = self.load(kind, &slug)? {
                records.push(record);
            }
        }

        records.sort_by(newest_first);
        Ok(records)
    }

    /// A record from `pages/`
    pub fn page_data(&self, slug: &str) -> Result<Option<ContentRecord>> {
        self.load(ContentType::Pages, slug)
    }

    /// Site-wide settings kept in `pages/global`
    pub fn global_data(&self) -> Result<Option<ContentRecord>> {
        self.page_data("global")
    }

    /// First existing file for a slug: the plain name, then each locale variant
    fn find_file(&self, kind: ContentType, slug: &str) -> Option<PathBuf> {
        let dir = self.type_dir(kind);
        let stems = std::iter::once(slug.to_string())
            .chain(self.locales.iter().map(|lang| format!("{}.{}", slug, lang)));

        for stem in stems {
            for ext in CONTENT_EXTENSIONS {
                let path = dir.join(format!("{}.{}", stem, ext));
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }

    /// `post.mdx` and `post.en.mdx` give `post`; non-content files give `None`
    fn slug_from_filename(&self, name: &str) -> Option<String> {
        let stem = CONTENT_EXTENSIONS
            .iter()
            .find_map(|ext| name.strip_suffix(&format!(".{}", ext)))?;

        let stem = self
            .locales
            .iter()
            .find_map(|lang| stem.strip_suffix(&format!(".{}", lang)))
            .unwrap_or(stem);

        if stem.is_empty() {
            None
        } else {
            Some(stem.to_string())
        }
    }
}

fn strip_content_extension(slug: &str) -> &str {
    CONTENT_EXTENSIONS
        .iter()
        .find_map(|ext| slug.strip_suffix(&format!(".{}", ext)))
        .unwrap_or(slug)
}

/// Read and parse one content file
fn load_file(path: &Path, slug: &str) -> Result<ContentRecord> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, body) = FrontMatter::parse(&text).map_err(|source| ContentError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ContentRecord::new(slug, fm, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, ContentLoader) {
        let dir = TempDir::new().unwrap();
        let fallback = FallbackResolver::new(dir.path().join("missing-guide.md"));
        let loader = ContentLoader::with_store(dir.path().join("content"), fallback);
        (dir, loader)
    }

    fn write(loader: &ContentLoader, kind: ContentType, name: &str, text: &str) {
        let dir = loader.type_dir(kind);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
    }

    #[test]
    fn test_slug_from_filename() {
        let (_dir, loader) = store();
        assert_eq!(loader.slug_from_filename("post.mdx"), Some("post".to_string()));
        assert_eq!(loader.slug_from_filename("post.es.mdx"), Some("post".to_string()));
        assert_eq!(loader.slug_from_filename("post.en.md"), Some("post".to_string()));
        assert_eq!(loader.slug_from_filename("v1.2.mdx"), Some("v1.2".to_string()));
        assert_eq!(loader.slug_from_filename("notes.txt"), None);
        assert_eq!(loader.slug_from_filename(".mdx"), None);
    }

    #[test]
    fn test_strip_content_extension() {
        assert_eq!(strip_content_extension("hello.mdx"), "hello");
        assert_eq!(strip_content_extension("hello"), "hello");
    }

    #[test]
    fn test_files_of_missing_dir() {
        let (_dir, loader) = store();
        assert!(loader.files(ContentType::Blog).unwrap().is_empty());
        assert!(loader.list_all(ContentType::Android).unwrap().is_empty());
    }

    #[test]
    fn test_load_prefers_plain_over_localized() {
        let (_dir, loader) = store();
        write(&loader, ContentType::Blog, "hi.es.mdx", "---\ntitle: Hola\n---\n");
        write(&loader, ContentType::Blog, "hi.mdx", "---\ntitle: Hi\n---\n");
        let record = loader.load(ContentType::Blog, "hi").unwrap().unwrap();
        assert_eq!(record.title(), Some("Hi"));
    }

    #[test]
    fn test_load_localized_only() {
        let (_dir, loader) = store();
        write(&loader, ContentType::Android, "app.en.mdx", "---\ntitle: App\n---\n");
        let record = loader.load(ContentType::Android, "app").unwrap().unwrap();
        assert_eq!(record.title(), Some("App"));
        assert_eq!(record.slug, "app");
    }

    #[test]
    fn test_load_accepts_extension_in_slug() {
        let (_dir, loader) = store();
        write(&loader, ContentType::Pages, "about.mdx", "---\ntitle: About\n---\n");
        let record = loader.load(ContentType::Pages, "about.mdx").unwrap().unwrap();
        assert_eq!(record.slug, "about");
    }

    #[test]
    fn test_static_slugs_skip_non_content() {
        let (_dir, loader) = store();
        write(&loader, ContentType::Projects, "a.mdx", "");
        write(&loader, ContentType::Projects, "a.en.mdx", "");
        write(&loader, ContentType::Projects, "b.md", "");
        write(&loader, ContentType::Projects, "cover.png", "");
        assert_eq!(
            loader.files(ContentType::Projects).unwrap(),
            vec!["a.en.mdx", "a.mdx", "b.md", "cover.png"]
        );
        assert_eq!(loader.static_slugs(ContentType::Projects).unwrap(), vec!["a", "b"]);
    }
}
