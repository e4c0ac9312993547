//! Lyrics input loading.
//!
//! Text can come from the command line, a file or stdin.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where the lyrics to analyze come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line.
    Inline(String),
    /// A text file; `~` is already expanded.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl InputSource {
    /// Pick a source from CLI arguments. A file wins over inline text, and
    /// `-` as either one means stdin.
    pub fn resolve(text: Option<String>, file: Option<&str>) -> Self {
        match (text, file) {
            (_, Some("-")) => Self::Stdin,
            (_, Some(path)) => Self::File(expand_path(path)),
            (Some(text), None) if text == "-" => Self::Stdin,
            (Some(text), None) => Self::Inline(text),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the full text from this source.
    pub fn read(&self) -> Result<String> {
        let text = match self {
            Self::Inline(text) => text.clone(),
            Self::File(path) => {
                fs_err::read_to_string(path).map_err(|e| Error::io(e, path.clone()))?
            }
            Self::Stdin => read_from(std::io::stdin().lock())?,
        };
        tracing::debug!("Read {} byte(s) from {self}", text.len());
        ensure_not_blank(text)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => write!(f, "inline text"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "stdin"),
        }
    }
}

/// Read all text from a reader.
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

fn ensure_not_blank(text: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(Error::input(
            "No lyrics to analyze",
            "Pass TEXT, --file PATH, or pipe text on stdin",
        ));
    }
    Ok(text)
}
