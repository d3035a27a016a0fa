use std::panic::{self, AssertUnwindSafe};

/// Source of per-page text, addressed by 0-based page index.
pub trait PageText {
    fn page_count(&self) -> usize;

    /// Text of one page. Pages without a text layer yield an empty string.
    fn page_text(&self, index: usize) -> String;
}

/// Extract the text of every page of a PDF held in memory, one `String` per page.
///
/// `pdf-extract` can panic on documents it does not understand, so the call is
/// fenced with `catch_unwind`; any failure yields `None` and callers fall back to
/// [`extract_page_with_lopdf`].
pub fn extract_pages_from_mem(bytes: &[u8]) -> Option<Vec<String>> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    match result {
        Ok(Ok(pages)) => Some(pages),
        Ok(Err(e)) => {
            log::warn!("pdf-extract failed, falling back to lopdf: {}", e);
            None
        }
        Err(_) => {
            log::warn!("pdf-extract panicked, falling back to lopdf");
            None
        }
    }
}

/// Extract one page (1-based `page_num`) with lopdf's own text extraction.
pub fn extract_page_with_lopdf(doc: &lopdf::Document, page_num: u32) -> String {
    match doc.extract_text(&[page_num]) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("no text extracted from page {}: {}", page_num, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_do_not_panic() {
        assert!(extract_pages_from_mem(b"definitely not a pdf").is_none());
    }
}
