//! Per-invocation switches for the declaration transform.

use std::str::FromStr;

/// Which line terminators split the input into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEndings {
    /// Only `\r\n` separates lines. LF-only input is treated as one line.
    #[default]
    Crlf,
    /// `\r\n`, `\n` and a lone `\r` all separate lines.
    Any,
}

/// How tokens belonging to a `DECLARE` statement are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclareSuppression {
    /// Any line whose text contains `DECLARE` (case-insensitive, anywhere,
    /// including inside identifiers) contributes no variables at all.
    #[default]
    Line,
    /// A token is skipped only if the token itself contains `DECLARE`.
    Token,
    /// Only the token directly following a standalone `DECLARE` keyword is
    /// skipped; other variables on the line are still collected.
    Keyword,
}

/// Options controlling [`crate::synth::generate_declarations_with`].
///
/// `Default` reproduces the historical behaviour: CRLF-only lines, whole-line
/// `DECLARE` suppression, no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthOptions {
    pub line_endings: LineEndings,
    pub declare_suppression: DeclareSuppression,
    /// Emit one declaration per sanitized name, ordered by first occurrence.
    pub deduplicate: bool,
}

impl FromStr for LineEndings {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crlf" => Ok(LineEndings::Crlf),
            "any" => Ok(LineEndings::Any),
            other => Err(format!("unknown line ending mode '{other}' (expected crlf or any)")),
        }
    }
}

impl FromStr for DeclareSuppression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(DeclareSuppression::Line),
            "token" => Ok(DeclareSuppression::Token),
            "keyword" => Ok(DeclareSuppression::Keyword),
            other => Err(format!(
                "unknown declare mode '{other}' (expected line, token or keyword)"
            )),
        }
    }
}
