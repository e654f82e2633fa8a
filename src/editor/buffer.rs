//! In-memory editor used by the CLI and tests.

use anyhow::Result;

use super::port::{EditorPort, Selection, TextRange};

/// A document held in a `String` with a single selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferEditor {
    text: String,
    selection: TextRange,
}

impl BufferEditor {
    /// Open `text` with the caret at the start of the document.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: TextRange::default(),
        }
    }

    /// Open `text` with `selection` selected.
    pub fn with_selection(text: impl Into<String>, selection: TextRange) -> Result<Self> {
        let text = text.into();
        selection.validate(&text)?;
        Ok(Self { text, selection })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn selection(&self) -> TextRange {
        self.selection
    }
}

impl EditorPort for BufferEditor {
    fn get_selection(&self) -> Selection {
        Selection {
            range: self.selection,
            text: self.text[self.selection.start..self.selection.end].to_string(),
        }
    }

    fn get_document_text(&self) -> String {
        self.text.clone()
    }

    /// After the edit the selection covers the inserted text.
    fn replace(&mut self, range: TextRange, text: &str) -> Result<()> {
        range.validate(&self.text)?;
        self.text.replace_range(range.start..range.end, text);
        self.selection = TextRange::new(range.start, range.start + text.len());
        Ok(())
    }
}
