//! List site content

use anyhow::Result;

use crate::content::ContentType;
use crate::Folio;

/// List every record of a content type, newest first
pub fn run(folio: &Folio, content_type: &str, lang: Option<&str>) -> Result<()> {
    let kind: ContentType = content_type.parse()?;
    let lang = lang.unwrap_or(&folio.config.language);
    let records = folio.loader().list_all(kind)?;

    println!("{} ({}):", kind, records.len());
    for record in records {
        let date = record
            .parsed_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!(
            "  {} - {} [{}]",
            date,
            record.localized("title", lang).unwrap_or("Untitled"),
            record.slug
        );
    }

    Ok(())
}
