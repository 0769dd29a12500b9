//! Front-matter parsing
//!
//! A document carries front-matter only when it begins with `---` at
//! offset zero. The block runs to the next `---` delimiter line; inside
//! it, `key: value` lines populate the metadata map and anything else is
//! ignored. Parsing is total: every irregularity degrades to "no
//! metadata, the whole text is body".

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

const DELIMITER: &str = "---";

lazy_static! {
    static ref META_LINE: Regex = Regex::new(r"^([A-Za-z0-9_]+):\s*(.*)$").unwrap();
}

/// Metadata block of a frontmatter document
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from a raw document
    /// Returns (front_matter, body)
    pub fn parse(raw: &str) -> (Self, &str) {
        if !raw.starts_with(DELIMITER) {
            return (FrontMatter::default(), raw.trim());
        }

        // Closing delimiter must start a line of its own; without one the
        // entire document is body text.
        let rest = &raw[DELIMITER.len()..];
        let Some(end) = rest.find("\n---") else {
            return (FrontMatter::default(), raw.trim());
        };

        let mut fields = HashMap::new();
        for line in rest[..end].lines() {
            let line = line.trim_end_matches('\r');
            if let Some(caps) = META_LINE.captures(line) {
                fields.insert(caps[1].to_string(), caps[2].trim().to_string());
            }
        }

        let body = rest[end + "\n---".len()..].trim();
        (FrontMatter { fields }, body)
    }

    /// Look up a metadata field, treating empty values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
