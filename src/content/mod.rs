//! Content module - content store access, front-matter and fallbacks

mod error;
mod fallback;
mod frontmatter;
mod kind;
pub mod loader;
mod markdown;
mod record;

pub use error::{ContentError, FrontMatterError, Result};
pub use fallback::{FallbackResolver, Skills, StyleGuide};
pub use frontmatter::{parse_date_string, FrontMatter};
pub use kind::ContentType;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use record::{newest_first, ContentRecord};
