//! Extract plain text from a PDF, optionally restricted to a set of pages.
//!
//! The pipeline is [`PdfDocument::open`] → [`page_range::select_pages`] →
//! [`pdf::assemble`] → [`output::save_text`] (or print). The two front-ends in
//! [`commands`] drive it from flags or from a guided prompt.

pub mod commands;
pub mod error;
pub mod output;
pub mod page_range;
pub mod pdf;

pub use error::{ExtractError, Result};
pub use pdf::PdfDocument;
