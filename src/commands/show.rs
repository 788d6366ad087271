//! Print one resolved record

use anyhow::Result;

use crate::content::ContentType;
use crate::Folio;

/// Print the record for `type/slug` as JSON, fallback included
pub fn run(folio: &Folio, content_type: &str, slug: &str) -> Result<()> {
    let kind: ContentType = content_type.parse()?;
    let loader = folio.loader();

    match loader.load(kind, slug)? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("No content for {}/{}", kind, slug),
    }

    Ok(())
}
