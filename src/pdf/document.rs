use crate::error::{ExtractError, Result};
use crate::pdf::text::{extract_page_with_lopdf, extract_pages_from_mem, PageText};
use lopdf::Document;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

/// An opened, unencrypted PDF ready for text extraction.
pub struct PdfDocument {
    doc: Document,
    bytes: Vec<u8>,
    path: PathBuf,
    page_count: usize,
    // Filled on first page_text call; None when pdf-extract could not handle the file.
    extracted: OnceCell<Option<Vec<String>>>,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ExtractError::Corrupt(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(bytes, path)
    }

    /// Parse an in-memory PDF. `path` is only used for naming.
    pub fn from_bytes<P: AsRef<Path>>(bytes: Vec<u8>, path: P) -> Result<Self> {
        let doc = Document::load_mem(&bytes).map_err(|e| {
            let message = e.to_string();
            if looks_like_encryption_error(&message) {
                ExtractError::Protected
            } else {
                ExtractError::Corrupt(message)
            }
        })?;

        if doc.is_encrypted() {
            return Err(ExtractError::Protected);
        }

        let page_count = doc.get_pages().len();
        log::debug!(
            "opened {} ({} pages)",
            path.as_ref().display(),
            page_count
        );

        Ok(PdfDocument {
            doc,
            bytes,
            path: path.as_ref().to_path_buf(),
            page_count,
            extracted: OnceCell::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl PageText for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> String {
        let extracted = self.extracted.get_or_init(|| {
            extract_pages_from_mem(&self.bytes).filter(|pages| {
                if pages.len() != self.page_count {
                    log::warn!(
                        "pdf-extract returned {} pages, expected {}",
                        pages.len(),
                        self.page_count
                    );
                }
                pages.len() == self.page_count
            })
        });

        match extracted.as_ref().and_then(|pages| pages.get(index)) {
            Some(text) => text.clone(),
            None => extract_page_with_lopdf(&self.doc, (index + 1) as u32),
        }
    }
}

fn looks_like_encryption_error(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    ["encrypt", "decrypt", "password"]
        .iter()
        .any(|needle| message.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = PdfDocument::open("/no/such/dir/missing.pdf").err().unwrap();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let err = PdfDocument::from_bytes(b"hello, not a pdf".to_vec(), "x.pdf")
            .err()
            .unwrap();
        assert!(matches!(err, ExtractError::Corrupt(_)));
    }

    #[test]
    fn test_encryption_error_detection() {
        assert!(looks_like_encryption_error("Decryption error: wrong key"));
        assert!(looks_like_encryption_error("Incorrect PASSWORD"));
        assert!(!looks_like_encryption_error("invalid file header"));
    }
}
