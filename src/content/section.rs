//! Language section extraction
//!
//! A frontmatter document's body holds one labeled section per language,
//! introduced by a `## <code>` header line. A section runs from the line
//! after its header up to the next header line or the end of the body.

use lazy_static::lazy_static;
use regex::Regex;

use super::Language;

const HEADER_PREFIX: &str = "##";

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Extract the paragraphs of one language's section
///
/// The header match is case-insensitive. Returns an empty list when the
/// body has no section for the language.
pub fn extract_section(body: &str, lang: Language) -> Vec<String> {
    let mut text = String::new();
    let mut in_section = false;

    for line in body.lines() {
        if let Some(label) = header_label(line) {
            if in_section {
                break;
            }
            in_section = label.eq_ignore_ascii_case(lang.code());
            continue;
        }
        if in_section {
            text.push_str(line);
            text.push('\n');
        }
    }

    split_paragraphs(&text)
}

/// Split section text into trimmed, non-empty paragraphs
///
/// Consecutive blank lines (including whitespace-only lines) collapse into
/// a single break.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

fn header_label(line: &str) -> Option<&str> {
    line.trim().strip_prefix(HEADER_PREFIX).map(str::trim)
}
