//! Contract submission flow: the draft text and its submission gates.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Below this many characters the submit action is disabled outright.
pub const MIN_ENABLED_CHARS: usize = 20;
/// Trimmed drafts shorter than this are rejected on submit.
pub const MIN_SUBMIT_CHARS: usize = 50;

/// Extensions the file picker advertises. Others are still read as plain text.
pub const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter enough contract text to analyze ({found} of {required} characters)")]
    TooShort { found: usize, required: usize },
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("failed to read contract file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Contract text being prepared for submission, with the name of the file it
/// came from when it was loaded rather than typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractDraft {
    text: String,
    file_name: Option<String>,
}

impl ContractDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Character count of the raw draft, as shown by the counter.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the draft with typed or pasted text. Clears any file label.
    pub fn set_text(&mut self, candidate: impl Into<String>) {
        self.text = candidate.into();
        self.file_name = None;
    }

    /// Install already-read file content under its display name.
    pub fn install_file(&mut self, file_name: impl Into<String>, content: impl Into<String>) {
        self.text = content.into();
        self.file_name = Some(file_name.into());
    }

    /// Read `path` into the draft. On error the draft is left untouched.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), DraftError> {
        let (name, content) = read_contract_file(path)?;
        self.install_file(name, content);
        Ok(())
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.char_count() >= MIN_ENABLED_CHARS
    }

    /// Validate the draft and return the text to analyze.
    pub fn submit(&self) -> Result<&str, ValidationError> {
        let found = self.text.trim().chars().count();
        if found < MIN_SUBMIT_CHARS {
            return Err(ValidationError::TooShort {
                found,
                required: MIN_SUBMIT_CHARS,
            });
        }
        Ok(&self.text)
    }
}

/// Read a contract file as UTF-8 plain text, returning its display name and content.
///
/// Extensions other than `.txt`/`.md` are accepted with a warning; no document
/// parsing is attempted.
pub fn read_contract_file(path: &Path) -> Result<(String, String), DraftError> {
    let name = display_name(path);
    let is_plain = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            PLAIN_TEXT_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });
    if !is_plain {
        warn!(file = %name, "not a .txt/.md file, reading as plain text");
    }

    let content = std::fs::read_to_string(path).map_err(|source| DraftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(file = %name, chars = content.chars().count(), "contract file loaded");
    Ok((name, content))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn set_text_clears_file_label() {
        let mut draft = ContractDraft::new();
        draft.install_file("nda.txt", "content");
        draft.set_text("typed instead");
        assert_eq!(draft.text(), "typed instead");
        assert_eq!(draft.file_name(), None);
    }

    #[test]
    fn nineteen_chars_disables_submit() {
        let mut draft = ContractDraft::new();
        draft.set_text("x".repeat(19));
        assert!(!draft.is_submit_enabled());
        draft.set_text("x".repeat(20));
        assert!(draft.is_submit_enabled());
    }

    #[test]
    fn fifty_chars_submits() {
        let mut draft = ContractDraft::new();
        draft.set_text("y".repeat(50));
        assert_eq!(draft.submit().unwrap().len(), 50);
    }

    #[test]
    fn whitespace_does_not_count_towards_minimum() {
        let mut draft = ContractDraft::new();
        draft.set_text(format!("   {}   ", "z".repeat(49)));
        assert!(draft.is_submit_enabled());
        assert_eq!(
            draft.submit().unwrap_err(),
            ValidationError::TooShort {
                found: 49,
                required: 50
            }
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut draft = ContractDraft::new();
        draft.set_text("ü".repeat(50));
        assert_eq!(draft.char_count(), 50);
        assert!(draft.submit().is_ok());
    }

    #[test]
    fn loads_plain_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lease.md");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# Lease\nThe tenant shall pay rent monthly.").unwrap();

        let mut draft = ContractDraft::new();
        draft.load_from_file(&path).unwrap();
        assert_eq!(draft.file_name(), Some("lease.md"));
        assert!(draft.text().starts_with("# Lease"));
    }

    #[test]
    fn missing_file_leaves_draft_untouched() {
        let mut draft = ContractDraft::new();
        draft.set_text("keep me");
        let err = draft
            .load_from_file(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(matches!(err, DraftError::Io { .. }));
        assert_eq!(draft.text(), "keep me");
    }

    #[test]
    fn binary_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.pdf");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let mut draft = ContractDraft::new();
        assert!(draft.load_from_file(&path).is_err());
        assert_eq!(draft.file_name(), None);
    }
}
