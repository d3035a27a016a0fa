use crate::error::{ExtractError, Result};
use crate::pdf::text::PageText;
use regex::Regex;
use std::sync::OnceLock;

const RULE_CHAR: char = '=';
const RULE_WIDTH: usize = 60;

/// The page-boundary marker written before each page's text.
///
/// Rendering and stripping are kept together: [`PageMarker::strip`] removes
/// exactly what [`PageMarker::render`] emits and nothing else.
pub struct PageMarker;

impl PageMarker {
    pub fn rule() -> String {
        RULE_CHAR.to_string().repeat(RULE_WIDTH)
    }

    fn label(page_number: usize) -> String {
        format!("--- PAGE {} ---", page_number)
    }

    /// Marker for a 1-based page number.
    pub fn render(page_number: usize) -> String {
        let rule = Self::rule();
        format!("\n{}\n{}\n{}\n", rule, Self::label(page_number), rule)
    }

    /// Remove every marker from assembled text, leaving only page content.
    pub fn strip(text: &str) -> String {
        Self::pattern().replace_all(text, "").into_owned()
    }

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            let rule = regex::escape(&Self::rule());
            let label = regex::escape(&Self::label(0)).replace('0', r"\d+");
            Regex::new(&format!(r"(?m)^{rule}\n{label}\n{rule}$"))
                .expect("page marker pattern is a valid regex")
        })
    }
}

/// Concatenate the text of `pages` (0-based, in the given order) with a marker
/// in front of each page.
///
/// Fails with [`ExtractError::NoExtractableText`] when no selected page has any
/// text once the markers are removed.
pub fn assemble<D: PageText + ?Sized>(doc: &D, pages: &[usize]) -> Result<String> {
    log::debug!("assembling {} of {} pages", pages.len(), doc.page_count());

    let blocks: Vec<String> = pages
        .iter()
        .map(|&index| {
            let text = doc.page_text(index);
            log::debug!("page {}: {} chars", index + 1, text.len());
            format!("{}{}", PageMarker::render(index + 1), text)
        })
        .collect();

    let text = blocks.join("\n").trim().to_string();

    if PageMarker::strip(&text).trim().is_empty() {
        return Err(ExtractError::NoExtractableText);
    }

    Ok(text)
}
