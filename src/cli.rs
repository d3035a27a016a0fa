use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdftext")]
#[command(about = "Extract plain text from PDF files")]
#[command(
    long_about = "Extract plain text from PDF files.\n\nRun without --input to be guided through the extraction step by step."
)]
#[command(version)]
#[command(after_help = "Examples:
  pdftext --input doc.pdf
  pdftext --input doc.pdf --pages 1
  pdftext --input doc.pdf --pages 1-3,5,10
  pdftext --input doc.pdf --output result.txt
  pdftext                  (guided mode)")]
pub struct Cli {
    /// PDF file to extract from (omit to start guided mode)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Pages to extract (e.g., "1", "1-3", "1-3,5,10"); default: all pages
    #[arg(long, requires = "input", allow_hyphen_values = true)]
    pub pages: Option<String>,

    /// Save the text to this file instead of printing it
    #[arg(long, value_name = "PATH", requires = "input")]
    pub output: Option<PathBuf>,

    /// Print only the extracted text, without progress messages
    #[arg(short, long, requires = "input")]
    pub quiet: bool,
}
