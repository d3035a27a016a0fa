use crate::error::{ExtractError, Result};
use std::collections::BTreeSet;

/// One comma-separated token of a page specification, in 1-based page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: usize,
    pub end: Option<usize>,
}

impl PageRange {
    /// Parse a single token like "5" or "1-3". Shape and ordering are checked
    /// here; the document bound is checked by [`PageRange::expand`].
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();

        if token.contains('-') {
            let bounds: Vec<&str> = token.split('-').collect();
            if bounds.len() != 2 {
                return Err(ExtractError::MalformedRange(token.to_string()));
            }
            let start = parse_page_number(bounds[0], token)?;
            let end = parse_page_number(bounds[1], token)?;
            if start < 1 || end < start {
                return Err(ExtractError::MalformedRange(token.to_string()));
            }
            Ok(PageRange {
                start,
                end: Some(end),
            })
        } else {
            Ok(PageRange {
                start: parse_page_number(token, token)?,
                end: None,
            })
        }
    }

    /// Expand into 0-based page indices, validated against `total_pages`.
    pub fn expand(&self, total_pages: usize) -> Result<Vec<usize>> {
        match self.end {
            Some(end) => {
                if self.start < 1 || end < self.start {
                    return Err(ExtractError::MalformedRange(format!(
                        "{}-{}",
                        self.start, end
                    )));
                }
                if end > total_pages {
                    return Err(ExtractError::PageOutOfBounds {
                        page: end,
                        total: total_pages,
                    });
                }
                Ok((self.start..=end).map(|p| p - 1).collect())
            }
            None => {
                if self.start < 1 || self.start > total_pages {
                    return Err(ExtractError::PageOutOfBounds {
                        page: self.start,
                        total: total_pages,
                    });
                }
                Ok(vec![self.start - 1])
            }
        }
    }
}

fn parse_page_number(s: &str, token: &str) -> Result<usize> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| ExtractError::MalformedRange(token.to_string()))
}

/// Expand a page specification like "1-3,5,10" into sorted, deduplicated
/// 0-based page indices.
///
/// Tokens are validated left to right and the first bad one is reported.
pub fn expand_page_ranges(spec: &str, total_pages: usize) -> Result<Vec<usize>> {
    let mut pages = BTreeSet::new();
    for token in spec.split(',') {
        let range = PageRange::parse(token)?;
        pages.extend(range.expand(total_pages)?);
    }
    Ok(pages.into_iter().collect())
}

/// Every page of a `total_pages` document.
pub fn all_pages(total_pages: usize) -> Vec<usize> {
    (0..total_pages).collect()
}

/// Resolve an optional specification; absent or blank means all pages.
pub fn select_pages(spec: Option<&str>, total_pages: usize) -> Result<Vec<usize>> {
    match spec {
        Some(s) if !s.trim().is_empty() => expand_page_ranges(s, total_pages),
        _ => Ok(all_pages(total_pages)),
    }
}

/// Render 0-based indices as the 1-based list shown to users.
pub fn display_pages(pages: &[usize]) -> String {
    pages
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
