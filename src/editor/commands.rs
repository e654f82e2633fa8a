//! The two editor commands: declare variables for the selection or the whole
//! document.

use anyhow::Result;

use crate::synth::{build_declaration_block, Clock, SynthOptions};

use super::port::{EditorHost, EditorPort, TextRange};

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Declarations were inserted; `declarations` counts the statements.
    Applied { declarations: usize },
    /// There was no active editor, nothing was touched.
    NoActiveEditor,
}

/// Replace the selection with the declaration block followed by the selected text.
pub fn apply_to_selection(
    host: &mut dyn EditorHost,
    options: &SynthOptions,
    clock: &dyn Clock,
) -> Result<CommandOutcome> {
    let Some(editor) = host.active_editor() else {
        tracing::debug!("no active editor, selection command skipped");
        return Ok(CommandOutcome::NoActiveEditor);
    };
    let selection = editor.get_selection();
    insert_declarations(editor, selection.range, &selection.text, options, clock)
}

/// Replace the whole document with the declaration block followed by the document.
pub fn apply_to_document(
    host: &mut dyn EditorHost,
    options: &SynthOptions,
    clock: &dyn Clock,
) -> Result<CommandOutcome> {
    let Some(editor) = host.active_editor() else {
        tracing::debug!("no active editor, document command skipped");
        return Ok(CommandOutcome::NoActiveEditor);
    };
    let text = editor.get_document_text();
    insert_declarations(editor, TextRange::whole(&text), &text, options, clock)
}

fn insert_declarations(
    editor: &mut dyn EditorPort,
    range: TextRange,
    sql: &str,
    options: &SynthOptions,
    clock: &dyn Clock,
) -> Result<CommandOutcome> {
    let block = build_declaration_block(sql, options, clock);
    // Block already ends in CRLF; a bare LF separates it from the SQL.
    let replacement = format!("{block}\n{sql}");
    editor.replace(range, &replacement)?;
    Ok(CommandOutcome::Applied {
        declarations: block.len(),
    })
}
