//! Guided console dialogue for users who do not want to type flags.
//!
//! The session walks through four steps (pick a file, pick pages, extract,
//! pick what to do with the text) and re-asks whenever a choice is rejected.

use crate::error::ExtractError;
use crate::output::{default_output_name, save_text, with_txt_extension};
use crate::page_range::{all_pages, display_pages, expand_page_ranges};
use crate::pdf::{assemble, PageMarker, PdfDocument};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    /// No extractable text, the output file could not be written, or input
    /// ran out before the dialogue finished.
    Failed,
}

impl SessionEnd {
    pub fn exit_code(self) -> ExitCode {
        match self {
            SessionEnd::Completed => ExitCode::SUCCESS,
            SessionEnd::Failed => ExitCode::FAILURE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Display,
    Save,
    Both,
}

struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line; `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &ExtractError) -> Result<()> {
        self.say(&format!("Error: {}", err))
    }
}

/// Run the dialogue to completion.
///
/// Errors are only returned for console I/O failures. Bad paths and page
/// specs are reported and asked again; extraction and write failures end the
/// session as [`SessionEnd::Failed`].
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<SessionEnd> {
    let mut p = Prompter { input, output };

    p.say("PDF text extractor")?;
    p.say(&"-".repeat(40))?;

    let end = session(&mut p)?;

    p.ask("\nPress Enter to exit...")?;
    Ok(end)
}

fn session<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<SessionEnd> {
    let Some(doc) = choose_document(p)? else {
        return Ok(SessionEnd::Failed);
    };
    let Some(pages) = choose_pages(p, doc.page_count())? else {
        return Ok(SessionEnd::Failed);
    };

    p.say("\nStep 3 of 4: extracting text...")?;
    let text = match assemble(&doc, &pages) {
        Ok(text) => text,
        Err(e) => {
            p.report(&e)?;
            return Ok(SessionEnd::Failed);
        }
    };

    let Some(disposition) = choose_disposition(p)? else {
        return Ok(SessionEnd::Failed);
    };

    if matches!(disposition, Disposition::Display | Disposition::Both) {
        let rule = PageMarker::rule();
        p.say(&format!("\n{}\nEXTRACTED TEXT\n{}", rule, rule))?;
        p.say(&text)?;
    }
    if matches!(disposition, Disposition::Save | Disposition::Both)
        && !save_interactively(p, &doc, &text)?
    {
        return Ok(SessionEnd::Failed);
    }

    p.say("\nExtraction completed successfully!")?;
    Ok(SessionEnd::Completed)
}

fn choose_document<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Option<PdfDocument>> {
    p.say("\nStep 1 of 4: choose the PDF file")?;
    loop {
        let Some(answer) = p.ask("PDF file path: ")? else {
            return Ok(None);
        };
        let path = strip_quotes(&answer);
        if path.is_empty() {
            p.say("Please enter the path to a PDF file.")?;
            continue;
        }

        match PdfDocument::open(path) {
            Ok(doc) => {
                p.say(&format!("File: {}", path))?;
                p.say(&format!("Total pages: {}", doc.page_count()))?;
                return Ok(Some(doc));
            }
            Err(e) => p.report(&e)?,
        }
    }
}

fn choose_pages<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    total_pages: usize,
) -> Result<Option<Vec<usize>>> {
    p.say("\nStep 2 of 4: choose the pages")?;
    p.say("  [1] All pages")?;
    p.say("  [2] Specific pages")?;
    loop {
        let Some(answer) = p.ask("Option [1/2]: ")? else {
            return Ok(None);
        };
        match answer.as_str() {
            "1" => {
                p.say("Extracting all pages.")?;
                return Ok(Some(all_pages(total_pages)));
            }
            "2" => break,
            _ => p.say("Please enter 1 or 2.")?,
        }
    }

    loop {
        let prompt = format!("Pages (1-{}, e.g. 1-3,5): ", total_pages);
        let Some(spec) = p.ask(&prompt)? else {
            return Ok(None);
        };
        match expand_page_ranges(&spec, total_pages) {
            Ok(pages) => {
                p.say(&format!("Selected pages: {}", display_pages(&pages)))?;
                return Ok(Some(pages));
            }
            Err(e) => p.report(&e)?,
        }
    }
}

fn choose_disposition<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Option<Disposition>> {
    p.say("\nStep 4 of 4: what should happen with the text?")?;
    p.say("  [1] Display it")?;
    p.say("  [2] Save it to a file")?;
    p.say("  [3] Both")?;
    loop {
        let Some(answer) = p.ask("Option [1/2/3]: ")? else {
            return Ok(None);
        };
        match answer.as_str() {
            "1" => return Ok(Some(Disposition::Display)),
            "2" => return Ok(Some(Disposition::Save)),
            "3" => return Ok(Some(Disposition::Both)),
            _ => p.say("Please enter 1, 2 or 3.")?,
        }
    }
}

/// Ask for a file name and write the text once. `false` if input ran out or
/// the write failed; write errors are reported, not retried.
fn save_interactively<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    doc: &PdfDocument,
    text: &str,
) -> Result<bool> {
    let default_name = default_output_name(doc.path());
    let prompt = format!("Output file [{}]: ", default_name.display());
    let Some(answer) = p.ask(&prompt)? else {
        return Ok(false);
    };
    let name = strip_quotes(&answer);
    let target = if name.is_empty() {
        default_name
    } else {
        with_txt_extension(name)
    };

    match save_text(text, &target) {
        Ok(written) => {
            p.say(&format!("Text saved to: {}", written.display()))?;
            Ok(true)
        }
        Err(e) => {
            p.report(&e)?;
            Ok(false)
        }
    }
}

/// Paths dragged into a terminal often arrive wrapped in quotes.
fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return s[1..s.len() - 1].trim();
        }
    }
    s
}
