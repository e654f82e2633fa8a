//! Host editor abstraction.

use anyhow::Result;

use crate::error::InstantSqlVarsError;

/// Half-open byte range `start..end` into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Range covering all of `text`.
    pub fn whole(text: &str) -> Self {
        Self::new(0, text.len())
    }

    /// Byte range spanning 1-based lines `first..=last` of `text`, excluding
    /// the final line's terminator (`\n` or `\r\n`).
    pub fn for_lines(text: &str, first: usize, last: usize) -> Result<Self> {
        let mut starts = vec![0];
        starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));

        if first == 0 || first > last {
            return Err(InstantSqlVarsError::InvalidLineRange {
                message: format!("{first}:{last} (lines are 1-based and first <= last)"),
            }
            .into());
        }
        if last > starts.len() {
            return Err(InstantSqlVarsError::InvalidLineRange {
                message: format!(
                    "{first}:{last} exceeds the {} lines in the document",
                    starts.len()
                ),
            }
            .into());
        }

        let start = starts[first - 1];
        let end = match starts.get(last) {
            Some(&next) => {
                let newline = next - 1;
                if text[..newline].ends_with('\r') {
                    newline - 1
                } else {
                    newline
                }
            }
            None => text.len(),
        };
        Ok(Self::new(start, end))
    }

    /// Check the range lies within `text` on character boundaries.
    pub fn validate(&self, text: &str) -> Result<()> {
        let valid = self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end);
        if valid {
            Ok(())
        } else {
            Err(InstantSqlVarsError::InvalidSelection {
                start: self.start,
                end: self.end,
                len: text.len(),
            }
            .into())
        }
    }
}

/// Current selection of an editor: its range and the text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub range: TextRange,
    pub text: String,
}

/// Operations the commands need from an open document.
pub trait EditorPort {
    /// The selected range and its text. An empty selection is a caret.
    fn get_selection(&self) -> Selection;

    /// Full document text.
    fn get_document_text(&self) -> String;

    /// Replace `range` with `text`.
    fn replace(&mut self, range: TextRange, text: &str) -> Result<()>;
}

/// Supplies the editor a command should act on, if any.
pub trait EditorHost {
    fn active_editor(&mut self) -> Option<&mut dyn EditorPort>;
}

impl<E: EditorPort> EditorHost for Option<E> {
    fn active_editor(&mut self) -> Option<&mut dyn EditorPort> {
        self.as_mut().map(|editor| editor as &mut dyn EditorPort)
    }
}
