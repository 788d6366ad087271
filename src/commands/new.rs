//! Create a new content file

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentType;
use crate::Folio;

const DEFAULT_SCAFFOLD: &str = r#"---
title: {{ title }}
date: {{ date }}
tags: []
---
"#;

/// Write a scaffolded content file and return its path
pub fn create_content(
    folio: &Folio,
    kind: ContentType,
    title: &str,
    slug: Option<&str>,
    lang: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let filename = match lang {
        Some(lang) if folio.config.locales.iter().any(|l| l == lang) => {
            format!("{}.{}.{}", slug, lang, folio.config.content_ext)
        }
        Some(lang) => anyhow::bail!(
            "Unknown locale: {}. Configured: {}",
            lang,
            folio.config.locales.join(", ")
        ),
        None => format!("{}.{}", slug, folio.config.content_ext),
    };

    let target_dir = folio.content_dir.join(kind.dir_name());
    fs::create_dir_all(&target_dir)?;
    let file_path = target_dir.join(&filename);

    // Load scaffold template
    let scaffold_path = folio
        .base_dir
        .join("scaffolds")
        .join(format!("{}.{}", kind, folio.config.content_ext));
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    // A JSON string is a valid double-quoted YAML scalar
    let quoted_title = serde_json::to_string(title)?;
    let content = scaffold_content
        .replace("{{ title }}", &quoted_title)
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, content)?;
    tracing::info!("Created {} {:?}", kind, file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(
    folio: &Folio,
    content_type: &str,
    title: &str,
    slug: Option<&str>,
    lang: Option<&str>,
) -> Result<()> {
    let kind: ContentType = content_type.parse()?;
    let path = create_content(folio, kind, title, slug, lang)?;
    println!("Created: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_load() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path =
            create_content(&folio, ContentType::Blog, "Kotlin: Flows", None, None).unwrap();
        assert!(path.ends_with("content/blog/kotlin-flows.mdx"));

        let record = folio
            .loader()
            .load(ContentType::Blog, "kotlin-flows")
            .unwrap()
            .unwrap();
        assert_eq!(record.title(), Some("Kotlin: Flows"));
        assert!(record.parsed_date().is_some());
    }

    #[test]
    fn test_localized_file_name() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_content(&folio, ContentType::Android, "App", Some("app"), Some("en"))
            .unwrap();
        assert!(path.ends_with("content/android/app.en.mdx"));
        assert!(create_content(&folio, ContentType::Android, "App", Some("app"), Some("fr")).is_err());
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_content(&folio, ContentType::Projects, "Same", None, None).unwrap();
        assert!(create_content(&folio, ContentType::Projects, "Same", None, None).is_err());
    }
}
