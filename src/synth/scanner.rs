//! Whitespace tokenization of SQL text into candidate `@variable` tokens.

use crate::util::{contains_ci, split_any_line_ending};

use super::options::{DeclareSuppression, LineEndings, SynthOptions};

/// A raw `@`-prefixed token found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableToken {
    /// Token text as it appeared, trailing punctuation included.
    pub raw: String,
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based index of the token within its line's space-split tokens.
    pub position: usize,
}

/// Collect candidate variable tokens in encounter order, top-to-bottom and
/// left-to-right.
///
/// Lines are split on single spaces only; tabs and other whitespace stay
/// inside tokens.
pub fn scan_variables(sql: &str, options: &SynthOptions) -> Vec<VariableToken> {
    let lines: Vec<&str> = match options.line_endings {
        LineEndings::Crlf => sql.split("\r\n").collect(),
        LineEndings::Any => split_any_line_ending(sql),
    };

    let mut tokens = Vec::new();
    for (line_index, line) in lines.into_iter().enumerate() {
        scan_line(line, line_index, options.declare_suppression, &mut tokens);
    }
    tokens
}

fn scan_line(
    line: &str,
    line_index: usize,
    suppression: DeclareSuppression,
    out: &mut Vec<VariableToken>,
) {
    if suppression == DeclareSuppression::Line && contains_ci(line, "DECLARE") {
        tracing::trace!(line = line_index, "skipping DECLARE line");
        return;
    }

    let mut follows_declare = false;
    for (position, token) in line.split(' ').enumerate() {
        if token.is_empty() {
            continue;
        }
        let declared_here = std::mem::take(&mut follows_declare);
        if token.eq_ignore_ascii_case("DECLARE") {
            follows_declare = true;
            continue;
        }
        if !token.starts_with('@') {
            continue;
        }

        let suppressed = match suppression {
            DeclareSuppression::Line => false,
            DeclareSuppression::Token => contains_ci(token, "DECLARE"),
            DeclareSuppression::Keyword => declared_here,
        };
        if suppressed {
            tracing::trace!(token, line = line_index, "skipping declared token");
            continue;
        }

        out.push(VariableToken {
            raw: token.to_string(),
            line: line_index,
            position,
        });
    }
}

/// Strip `,`, `(` and `)` anywhere in the token, then trim surrounding whitespace.
pub fn sanitize_variable(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ',' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}
