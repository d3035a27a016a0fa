use crate::error::{ExtractError, Result};
use std::path::{Path, PathBuf};

const DEFAULT_SUFFIX: &str = "_extracted";
const TEXT_EXTENSION: &str = ".txt";

/// Write extracted text to `path` as UTF-8, replacing any existing file.
///
/// Returns the absolute path written, for the confirmation message.
pub fn save_text<P: AsRef<Path>>(text: &str, path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    std::fs::write(path, text.as_bytes()).map_err(|source| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());

    Ok(std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()))
}

/// Suggested output file for `input`: its base name plus `_extracted.txt`.
pub fn default_output_name<P: AsRef<Path>>(input: P) -> PathBuf {
    let stem = input
        .as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{}{}{}", stem, DEFAULT_SUFFIX, TEXT_EXTENSION))
}

/// Append `.txt` to a user-supplied file name that lacks it.
pub fn with_txt_extension(name: &str) -> PathBuf {
    if name.to_ascii_lowercase().ends_with(TEXT_EXTENSION) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}{}", name, TEXT_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_name() {
        assert_eq!(
            default_output_name("/tmp/reports/q3 summary.pdf"),
            PathBuf::from("q3 summary_extracted.txt")
        );
        assert_eq!(
            default_output_name("scan"),
            PathBuf::from("scan_extracted.txt")
        );
    }

    #[test]
    fn test_with_txt_extension() {
        assert_eq!(with_txt_extension("notes"), PathBuf::from("notes.txt"));
        assert_eq!(with_txt_extension("notes.txt"), PathBuf::from("notes.txt"));
        assert_eq!(with_txt_extension("NOTES.TXT"), PathBuf::from("NOTES.TXT"));
        assert_eq!(with_txt_extension("notes.md"), PathBuf::from("notes.md.txt"));
    }

    #[test]
    fn test_save_overwrites_as_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents that are longer").unwrap();

        let written = save_text("página ✓", &path).unwrap();

        assert!(written.is_absolute());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "página ✓");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        assert!(matches!(
            save_text("x", &path),
            Err(ExtractError::Write { .. })
        ));
    }
}
