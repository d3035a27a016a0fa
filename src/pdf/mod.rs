pub mod assemble;
pub mod document;
pub mod text;

pub use assemble::{assemble, PageMarker};
pub use document::PdfDocument;
pub use text::PageText;
