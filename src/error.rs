use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Everything that can go wrong between a path on disk and extracted text.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("File not found: '{}'", .0.display())]
    NotFound(PathBuf),

    /// The file exists but is not a PDF we can parse
    #[error("Failed to read PDF: {0}")]
    Corrupt(String),

    #[error("This PDF is password-protected. Supply an unprotected copy of the file.")]
    Protected,

    #[error("Invalid range: '{0}'")]
    MalformedRange(String),

    #[error("Page {page} is out of range. The PDF has {total} page(s).")]
    PageOutOfBounds { page: usize, total: usize },

    #[error(
        "No extractable text found. The PDF may contain only images or scanned pages."
    )]
    NoExtractableText,

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// The document could not be used at all: unparseable or encrypted.
    pub fn is_invalid_document(&self) -> bool {
        matches!(self, ExtractError::Corrupt(_) | ExtractError::Protected)
    }

    /// The user's page specification was rejected.
    pub fn is_page_spec_error(&self) -> bool {
        matches!(
            self,
            ExtractError::MalformedRange(_) | ExtractError::PageOutOfBounds { .. }
        )
    }
}
