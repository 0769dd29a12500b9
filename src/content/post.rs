//! Post model and language types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The languages a post carries content for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Cn,
}

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 2] = [Language::En, Language::Cn];

    /// Language code as it appears in section headers and metadata keys
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Cn => "cn",
        }
    }

    /// Title placeholder used when a document yields no title at all
    pub fn untitled(&self) -> &'static str {
        match self {
            Language::En => "Untitled",
            Language::Cn => "未命名",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "cn" => Ok(Language::Cn),
            other => Err(anyhow::anyhow!("Unknown language: {}", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fixed-size per-language record
///
/// The language set is closed, so this is a struct with one field per
/// language rather than a string-keyed map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub cn: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, cn: T) -> Self {
        Self { en, cn }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Cn => &self.cn,
        }
    }
}

/// A blog post in canonical form
///
/// This is the sole contract between the loader and everything downstream
/// (listing, filtering, selection). Structured JSON records map onto it
/// directly; camelCase covers their `imageUrl` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identity, unique within a loaded collection
    pub id: String,

    /// Per-language title
    pub title: Localized<String>,

    /// Per-language one-line summary
    pub excerpt: Localized<String>,

    /// Per-language paragraphs, in reading order
    pub content: Localized<Vec<String>>,

    /// Publication date, `YYYY-MM-DD`; ordered as a plain string
    pub date: String,

    /// Free-text category label used for filtering
    pub category: String,

    /// Cover image reference
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_camel_case() {
        let raw = r#"{
            "id": "flowers",
            "title": { "en": "The Language of Flowers", "cn": "花语的秘密" },
            "excerpt": { "en": "What the forest whispers.", "cn": "森林的低语。" },
            "content": { "en": ["One.", "Two."], "cn": ["一。", "二。"] },
            "date": "2024-05-20",
            "category": "Nature",
            "imageUrl": "https://picsum.photos/id/28/800/600"
        }"#;

        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.id, "flowers");
        assert_eq!(post.title.get(Language::Cn), "花语的秘密");
        assert_eq!(post.content.en.len(), 2);
        assert_eq!(post.image_url, "https://picsum.photos/id/28/800/600");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("cn".parse::<Language>().unwrap(), Language::Cn);
        assert!("jp".parse::<Language>().is_err());
    }
}
