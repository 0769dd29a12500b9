//! Content loader - turns raw sources into the canonical post collection

use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::section::extract_section;
use super::{FrontMatter, Language, Localized, Post};
use crate::Akasha;

/// The shape of a raw post source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// JSON file already shaped like a `Post`
    Record,
    /// Markdown file with a front-matter block and labeled sections
    Document,
}

/// One enumerated post source: an identifier plus its raw text
///
/// Discovery and parsing are separate steps so the parse path can be fed
/// from anywhere (the content tree, tests, embedded fixtures).
#[derive(Debug, Clone)]
pub struct RawSource {
    /// Source name, typically the file path; documents derive their
    /// fallback id from it
    pub name: String,
    pub text: String,
    pub kind: SourceKind,
}

impl RawSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            kind,
        }
    }
}

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    akasha: &'a Akasha,
}

impl<'a> ContentLoader<'a> {
    pub fn new(akasha: &'a Akasha) -> Self {
        Self { akasha }
    }

    /// Load every post under the content directory
    ///
    /// Total: malformed sources are skipped or defaulted, never fatal. The
    /// result is sorted by date descending, stable for equal dates.
    pub fn load_posts(&self) -> Vec<Post> {
        let sources = self.discover_sources();
        self.parse_sources(sources)
    }

    /// Enumerate raw sources from the content directory
    ///
    /// Files are partitioned by extension: `.json` records, `.md` or
    /// `.markdown` documents. Anything else is ignored.
    pub fn discover_sources(&self) -> Vec<RawSource> {
        let content_dir = self.akasha.content_dir();
        if !content_dir.exists() {
            return Vec::new();
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(&content_dir)
            .sort_by_file_name()
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(kind) = source_kind(path) else {
                continue;
            };
            match fs::read_to_string(path) {
                Ok(text) => {
                    sources.push(RawSource::new(path.to_string_lossy(), text, kind));
                }
                Err(e) => {
                    tracing::warn!("Failed to read source {:?}: {}", path, e);
                }
            }
        }
        sources
    }

    /// Parse an already-enumerated source list into a sorted collection
    pub fn parse_sources(&self, sources: impl IntoIterator<Item = RawSource>) -> Vec<Post> {
        let mut posts = Vec::new();
        for source in sources {
            match source.kind {
                SourceKind::Record => match serde_json::from_str::<Post>(&source.text) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Skipping malformed record {}: {}", source.name, e);
                    }
                },
                SourceKind::Document => {
                    posts.push(self.parse_document(&source.name, &source.text));
                }
            }
        }

        // Lexicographic comparison is date-correct for YYYY-MM-DD, and the
        // stable sort keeps discovery order for equal dates.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Parse one front-matter document into a post
    ///
    /// Infallible: every field has a fallback chain ending in a default.
    fn parse_document(&self, name: &str, text: &str) -> Post {
        let (meta, body) = FrontMatter::parse(text);
        let en = extract_section(body, Language::En);
        let cn = extract_section(body, Language::Cn);

        let id = meta
            .get("id")
            .map(str::to_string)
            .unwrap_or_else(|| slug_from_name(name));

        let title_en = pick(meta.get("title_en"), [en.first()], Language::En.untitled());
        let title_cn = pick(meta.get("title_cn"), [cn.first()], Language::Cn.untitled());
        let excerpt_en = pick(meta.get("excerpt_en"), [en.get(1), en.first()], &title_en);
        let excerpt_cn = pick(meta.get("excerpt_cn"), [cn.get(1), cn.first()], &title_cn);

        let config = &self.akasha.config;
        let image_url = meta
            .get("imageUrl")
            .unwrap_or(&config.default_image)
            .to_string();
        let date = meta
            .get("date")
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
        let category = meta
            .get("category")
            .unwrap_or(&config.default_category)
            .to_string();

        Post {
            id,
            title: Localized::new(title_en, title_cn),
            excerpt: Localized::new(excerpt_en, excerpt_cn),
            content: Localized::new(en, cn),
            date,
            category,
            image_url,
        }
    }
}

/// First non-empty of: explicit metadata, paragraph candidates, default
fn pick<'a, const N: usize>(
    explicit: Option<&str>,
    paragraphs: [Option<&'a String>; N],
    default: &str,
) -> String {
    if let Some(value) = explicit {
        return value.to_string();
    }
    paragraphs
        .into_iter()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Derive a fallback id from a source name: strip directories and the
/// `.md`/`.markdown`/`.json` extension
fn slug_from_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    for ext in [".md", ".markdown", ".json"] {
        if base.len() > ext.len() && base.to_ascii_lowercase().ends_with(ext) {
            return base[..base.len() - ext.len()].to_string();
        }
    }
    base.to_string()
}

fn source_kind(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?;
    match ext.to_ascii_lowercase().as_str() {
        "json" => Some(SourceKind::Record),
        "md" | "markdown" => Some(SourceKind::Document),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    fn test_app() -> Akasha {
        Akasha::with_config(SiteConfig::default(), std::env::temp_dir())
    }

    fn record(id: &str, date: &str) -> RawSource {
        let text = format!(
            r#"{{
                "id": "{id}",
                "title": {{ "en": "T", "cn": "题" }},
                "excerpt": {{ "en": "E", "cn": "摘" }},
                "content": {{ "en": ["P"], "cn": ["段"] }},
                "date": "{date}",
                "category": "Nature",
                "imageUrl": "img"
            }}"#
        );
        RawSource::new(format!("{id}.json"), text, SourceKind::Record)
    }

    #[test]
    fn test_record_passes_through_unchanged() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let posts = loader.parse_sources([record("one", "2024-05-20")]);
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, "one");
        assert_eq!(post.title.en, "T");
        assert_eq!(post.excerpt.cn, "摘");
        assert_eq!(post.content.en, vec!["P"]);
        assert_eq!(post.date, "2024-05-20");
        assert_eq!(post.category, "Nature");
        assert_eq!(post.image_url, "img");
    }

    #[test]
    fn test_document_with_full_metadata() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let text = "---\n\
            id: dreams\n\
            title_en: Analyzing Dreams\n\
            title_cn: 梦境解析\n\
            date: 2024-05-18\n\
            category: Philosophy\n\
            imageUrl: https://picsum.photos/id/104/800/600\n\
            ---\n\n\
            ## en\n\n\
            Dreams order chaos.\n\n\
            They speak in riddles.\n\n\
            ## cn\n\n\
            梦将混乱整理为秩序。\n\n\
            它们用谜语说话。\n";

        let posts =
            loader.parse_sources([RawSource::new("dreams.md", text, SourceKind::Document)]);
        let post = &posts[0];
        assert_eq!(post.id, "dreams");
        assert_eq!(post.title.en, "Analyzing Dreams");
        assert_eq!(post.title.cn, "梦境解析");
        assert_eq!(post.date, "2024-05-18");
        assert_eq!(post.category, "Philosophy");
        assert_eq!(post.image_url, "https://picsum.photos/id/104/800/600");
        assert_eq!(post.content.en.len(), 2);
        assert_eq!(post.content.cn.len(), 2);
        assert_eq!(post.content.en[0], "Dreams order chaos.");
        // No explicit excerpt: second paragraph wins
        assert_eq!(post.excerpt.en, "They speak in riddles.");
        assert_eq!(post.excerpt.cn, "它们用谜语说话。");
    }

    #[test]
    fn test_document_without_frontmatter_falls_back() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let text = "## en\n\nOnly paragraph.\n";
        let posts = loader.parse_sources([RawSource::new(
            "content/posts/lonely.md",
            text,
            SourceKind::Document,
        )]);
        let post = &posts[0];
        assert_eq!(post.id, "lonely");
        assert_eq!(post.title.en, "Only paragraph.");
        // One paragraph: excerpt falls through second -> first
        assert_eq!(post.excerpt.en, "Only paragraph.");
        // No cn section anywhere: placeholder title, excerpt mirrors it
        assert_eq!(post.title.cn, "未命名");
        assert_eq!(post.excerpt.cn, "未命名");
        assert!(post.content.cn.is_empty());
        assert_eq!(post.category, "General");
        assert_eq!(post.image_url, SiteConfig::default().default_image);
        assert_eq!(post.date, Local::now().format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_document_without_sections_uses_placeholders() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let posts = loader.parse_sources([RawSource::new(
            "bare.md",
            "just some text\n",
            SourceKind::Document,
        )]);
        let post = &posts[0];
        assert_eq!(post.title.en, "Untitled");
        assert_eq!(post.title.cn, "未命名");
        assert!(post.content.en.is_empty());
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let posts = loader.parse_sources([record("old", "2024-05-18"), record("new", "2024-05-20")]);
        assert_eq!(posts[0].id, "new");
        assert_eq!(posts[1].id, "old");
    }

    #[test]
    fn test_equal_dates_keep_discovery_order() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let posts = loader.parse_sources([
            record("first", "2024-05-20"),
            record("second", "2024-05-20"),
            record("third", "2024-05-20"),
        ]);
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let bad = RawSource::new("bad.json", "{ not json", SourceKind::Record);
        let posts = loader.parse_sources([bad, record("good", "2024-01-01")]);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "good");
    }

    #[test]
    fn test_duplicate_ids_are_both_kept() {
        let app = test_app();
        let loader = ContentLoader::new(&app);

        let doc = RawSource::new("twin.md", "---\nid: twin\ndate: 2024-03-03\n---\n## en\n\nDoc twin.\n", SourceKind::Document);
        let posts = loader.parse_sources([record("twin", "2024-03-03"), doc]);
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.id == "twin"));
    }

    #[test]
    fn test_slug_from_name() {
        assert_eq!(slug_from_name("content/posts/hello-world.md"), "hello-world");
        assert_eq!(slug_from_name("a\\b\\notes.JSON"), "notes");
        assert_eq!(slug_from_name("plain"), "plain");
    }

    #[test]
    fn test_load_posts_partitions_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();

        fs::write(
            content.join("a-record.json"),
            r#"{
                "id": "rec",
                "title": { "en": "Rec", "cn": "记" },
                "excerpt": { "en": "E", "cn": "摘" },
                "content": { "en": [], "cn": [] },
                "date": "2024-05-20",
                "category": "Tech",
                "imageUrl": "img"
            }"#,
        )
        .unwrap();
        fs::write(
            content.join("b-doc.md"),
            "---\nid: doc\ndate: 2024-05-21\n---\n## en\n\nHello.\n",
        )
        .unwrap();
        fs::write(content.join("notes.txt"), "ignored").unwrap();

        let app = Akasha::with_config(SiteConfig::default(), dir.path());
        let posts = ContentLoader::new(&app).load_posts();

        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["doc", "rec"]);
    }
}
