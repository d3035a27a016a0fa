use crate::output::save_text;
use crate::page_range::{all_pages, display_pages, expand_page_ranges};
use crate::pdf::{assemble, PageMarker, PdfDocument};
use anyhow::{Context, Result};
use std::fmt;
use std::io::Write;
use std::path::Path;

pub struct ExtractArgs<'a> {
    pub input: &'a Path,
    pub pages: Option<&'a str>,
    pub output: Option<&'a Path>,
    /// Suppress progress lines; only the text (or nothing, with `output`) is written.
    pub quiet: bool,
}

/// Direct mode: open, select, extract, then print or save.
pub fn run<W: Write>(args: &ExtractArgs, out: &mut W) -> Result<()> {
    let quiet = args.quiet;
    note(out, quiet, format_args!("PDF text extractor"))?;
    note(out, quiet, format_args!("{}", "-".repeat(40)))?;

    let doc = PdfDocument::open(args.input)?;
    let total_pages = doc.page_count();
    note(out, quiet, format_args!("File: {}", args.input.display()))?;
    note(out, quiet, format_args!("Total pages: {}", total_pages))?;

    let page_list = match args.pages.filter(|spec| !spec.trim().is_empty()) {
        Some(spec) => {
            let pages = expand_page_ranges(spec, total_pages).context("Invalid pages")?;
            note(
                out,
                quiet,
                format_args!("Selected pages: {}", display_pages(&pages)),
            )?;
            pages
        }
        None => {
            note(out, quiet, format_args!("Extracting all pages..."))?;
            all_pages(total_pages)
        }
    };

    let text = assemble(&doc, &page_list).context("Extraction failed")?;

    match args.output {
        Some(path) => {
            let written = save_text(&text, path)?;
            note(out, quiet, format_args!("Text saved to: {}", written.display()))?;
        }
        None => {
            let rule = PageMarker::rule();
            note(
                out,
                quiet,
                format_args!("\n{}\nEXTRACTED TEXT\n{}", rule, rule),
            )?;
            writeln!(out, "{}", text)?;
        }
    }

    note(out, quiet, format_args!("\nExtraction completed successfully!"))?;
    Ok(())
}

fn note<W: Write>(out: &mut W, quiet: bool, line: fmt::Arguments) -> std::io::Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(out, "{}", line)
}
