use std::fs;
use std::path::Path;

use folio_rs::content::{ContentError, ContentLoader, ContentType, FallbackResolver};
use tempfile::TempDir;

const STYLE_GUIDE: &str = "Summary
Ingeniero de software enfocado en Android.

Skills
Lenguajes y Tecnologías
Kotlin, Java, Swift

Bases de Datos
PostgreSQL

Dominio Funcional
Banca

Projects
Weather

Certifications
None
";

struct Store {
    dir: TempDir,
    loader: ContentLoader,
}

impl Store {
    fn new(style_guide: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let guide = dir.path().join("ui-code-style-gtc.md");
        if let Some(text) = style_guide {
            fs::write(&guide, text).unwrap();
        }
        let loader = ContentLoader::with_store(dir.path().join("content"), FallbackResolver::new(guide));
        Self { dir, loader }
    }

    fn write(&self, kind: ContentType, name: &str, text: &str) {
        let dir = self.dir.path().join("content").join(kind.dir_name());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), text).unwrap();
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }
}

#[test]
fn load_round_trip() {
    let store = Store::new(None);
    store.write(
        ContentType::Blog,
        "first-post.mdx",
        "---\ntitle: \"X\"\ndate: \"2024-01-01\"\n---\nHello",
    );

    let record = store.loader.load(ContentType::Blog, "first-post").unwrap().unwrap();
    assert_eq!(record.title(), Some("X"));
    assert_eq!(record.date(), Some("2024-01-01"));
    assert_eq!(record.content, "Hello");
    assert_eq!(record.slug, "first-post");
}

#[test]
fn slug_comes_from_filename() {
    let store = Store::new(None);
    for kind in ContentType::ALL {
        store.write(kind, "real-name.mdx", "---\ntitle: T\nslug: something-else\n---\n");
        let record = store.loader.load(kind, "real-name").unwrap().unwrap();
        assert_eq!(record.slug, "real-name");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["slug"], "real-name");
    }
}

#[test]
fn missing_blog_post_gets_placeholder() {
    let store = Store::new(None);
    let record = store
        .loader
        .load(ContentType::Blog, "nonexistent-slug")
        .unwrap()
        .unwrap();
    assert_eq!(record.title(), Some("Artículo en redacción"));
    assert_eq!(record.tags(), ["Blog"]);
    assert_eq!(
        record.front_matter.description.as_deref(),
        Some("Este contenido estará disponible pronto.")
    );
    assert_eq!(record.slug, "nonexistent-slug");
}

#[test]
fn missing_project_titled_from_slug() {
    let store = Store::new(None);
    let record = store
        .loader
        .load(ContentType::Projects, "bank-core-api")
        .unwrap()
        .unwrap();
    assert_eq!(record.title(), Some("bank core api"));
    assert_eq!(record.slug, "bank-core-api");
}

#[test]
fn missing_android_post_is_absent() {
    let store = Store::new(Some(STYLE_GUIDE));
    assert!(store
        .loader
        .load(ContentType::Android, "nonexistent-slug")
        .unwrap()
        .is_none());
}

#[test]
fn missing_page_other_than_home_is_absent() {
    let store = Store::new(Some(STYLE_GUIDE));
    assert!(store.loader.page_data("about").unwrap().is_none());
    assert!(store.loader.global_data().unwrap().is_none());
}

#[test]
fn missing_home_built_from_style_guide() {
    let store = Store::new(Some(STYLE_GUIDE));
    let home = store.loader.page_data("home").unwrap().unwrap();
    assert_eq!(home.slug, "home");
    assert_eq!(home.title(), Some("Home"));
    assert!(home.content.contains("Ingeniero de software enfocado en Android."));
    assert!(home.content.contains("- Kotlin\n- Java\n- Swift"));
}

#[test]
fn absent_style_guide_resolves_empty() {
    let store = Store::new(None);
    let guide = store.loader.fallback().style_guide();
    assert_eq!(guide.summary, "");
    assert!(guide.skills.languages.is_empty());
    assert!(guide.skills.databases.is_empty());
    assert!(guide.skills.functional.is_empty());

    let json = serde_json::to_value(&guide).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "summary": "",
            "skills": {"languages": [], "databases": [], "functional": []}
        })
    );
}

#[test]
fn existing_file_wins_over_fallback() {
    let store = Store::new(Some(STYLE_GUIDE));
    store.write(ContentType::Pages, "home.mdx", "---\ntitle: Inicio\n---\nReal home");
    let home = store.loader.page_data("home").unwrap().unwrap();
    assert_eq!(home.title(), Some("Inicio"));
    assert_eq!(home.content, "Real home");
}

#[test]
fn list_all_sorts_newest_first() {
    let store = Store::new(None);
    store.write(ContentType::Blog, "march.mdx", "---\ndate: 2024-03-01\n---\n");
    store.write(ContentType::Blog, "january.mdx", "---\ndate: 2024-01-01\n---\n");
    store.write(ContentType::Blog, "february.mdx", "---\ndate: 2024-02-01\n---\n");

    let posts = store.loader.list_all(ContentType::Blog).unwrap();
    let dates: Vec<_> = posts.iter().map(|p| p.date().unwrap()).collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn list_all_puts_undated_last() {
    let store = Store::new(None);
    store.write(ContentType::Projects, "undated.mdx", "---\ntitle: U\n---\n");
    store.write(ContentType::Projects, "garbled.mdx", "---\ndate: soon\n---\n");
    store.write(ContentType::Projects, "dated.mdx", "---\ndate: 2020-06-01\n---\n");

    let posts = store.loader.list_all(ContentType::Projects).unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["dated", "garbled", "undated"]);
}

#[test]
fn list_all_deduplicates_localized_variants() {
    let store = Store::new(None);
    store.write(ContentType::Android, "compose.mdx", "---\ntitle: Compose\ndate: 2024-01-01\n---\n");
    store.write(ContentType::Android, "compose.es.mdx", "---\ntitle: Compose ES\n---\n");
    store.write(ContentType::Android, "room.en.mdx", "---\ntitle: Room\ndate: 2023-01-01\n---\n");
    store.write(ContentType::Android, "README.txt", "not content");

    let posts = store.loader.list_all(ContentType::Android).unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["compose", "room"]);
    assert_eq!(posts[0].title(), Some("Compose"));
}

#[test]
fn malformed_front_matter_is_fatal() {
    let store = Store::new(None);
    store.write(ContentType::Blog, "broken.mdx", "---\ntitle: [oops\n---\nbody");

    let err = store.loader.load(ContentType::Blog, "broken").unwrap_err();
    match err {
        ContentError::FrontMatter { path, .. } => assert!(path.ends_with("broken.mdx")),
        other => panic!("unexpected error: {}", other),
    }

    assert!(store.loader.list_all(ContentType::Blog).is_err());
}

#[test]
fn loads_are_repeatable() {
    let store = Store::new(None);
    store.write(ContentType::Pages, "about.mdx", "---\ntitle: About\n---\nMe");
    let a = store.loader.page_data("about").unwrap();
    let b = store.loader.page_data("about").unwrap();
    assert_eq!(a, b);
    assert!(store.root().join("content/pages/about.mdx").exists());
}
