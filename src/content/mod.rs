//! Content module - post model, front-matter parsing, and loading

mod frontmatter;
pub mod loader;
mod post;
mod section;

pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, RawSource, SourceKind};
pub use post::{Language, Localized, Post};
pub use section::{extract_section, split_paragraphs};
