//! instant-sql-vars: generate T-SQL `DECLARE` blocks for `@variables`
//!
//! This library scans SQL text for `@variable` references and synthesizes
//! declarations with types and placeholder values inferred from the names,
//! ready to paste above an ad-hoc query.

pub mod editor;
pub mod error;
pub mod source;
pub mod synth;
pub mod util;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

pub use error::InstantSqlVarsError;
pub use synth::{generate_declarations, generate_declarations_with, SynthOptions};

use editor::{BufferEditor, CommandOutcome, TextRange};
use synth::{Clock, FixedClock, SystemClock};

/// Options for printing the declaration block of a script
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// SQL file to scan; stdin when `None`
    pub input: Option<PathBuf>,
    /// Transform switches
    pub synth: SynthOptions,
    /// Date used for DATETIME placeholders; today when `None`
    pub date: Option<NaiveDate>,
}

/// Where `apply_to_file` sends the edited script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApplyTarget {
    /// Return the text to the caller
    #[default]
    Stdout,
    /// Write to another file
    File(PathBuf),
    /// Overwrite the input file
    InPlace,
}

/// Options for inserting declarations into a script
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// SQL file to edit
    pub input: PathBuf,
    /// 1-based inclusive line range to treat as the selection; whole document when `None`
    pub lines: Option<(usize, usize)>,
    /// Destination of the edited text
    pub target: ApplyTarget,
    /// Transform switches
    pub synth: SynthOptions,
    /// Date used for DATETIME placeholders; today when `None`
    pub date: Option<NaiveDate>,
}

/// Result of `apply_to_file`
#[derive(Debug, Clone)]
pub struct ApplyResult {
    /// The full edited document
    pub text: String,
    /// Number of DECLARE statements inserted
    pub declarations: usize,
    /// File written, if any
    pub written_to: Option<PathBuf>,
}

/// Produce the declaration block for a file or stdin
pub fn generate(options: &GenerateOptions) -> Result<String> {
    let sql = match &options.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading SQL");
            source::read_sql_file(path)?
        }
        None => source::read_sql_stream(std::io::stdin().lock())?,
    };

    let clock = clock_for(options.date);
    Ok(generate_declarations_with(&sql, &options.synth, clock.as_ref()))
}

/// Insert declarations into a SQL file, over the whole document or a line range
pub fn apply_to_file(options: &ApplyOptions) -> Result<ApplyResult> {
    tracing::info!(path = %options.input.display(), "reading SQL");
    let sql = source::read_sql_file(&options.input)?;

    let mut host = Some(match options.lines {
        Some((first, last)) => {
            let range = TextRange::for_lines(&sql, first, last)?;
            BufferEditor::with_selection(sql, range)?
        }
        None => BufferEditor::new(sql),
    });

    let clock = clock_for(options.date);
    let outcome = if options.lines.is_some() {
        editor::apply_to_selection(&mut host, &options.synth, clock.as_ref())?
    } else {
        editor::apply_to_document(&mut host, &options.synth, clock.as_ref())?
    };
    let declarations = match outcome {
        CommandOutcome::Applied { declarations } => declarations,
        CommandOutcome::NoActiveEditor => 0,
    };
    tracing::info!(declarations, "declarations inserted");

    let text = host.map(BufferEditor::into_text).unwrap_or_default();

    let written_to = match &options.target {
        ApplyTarget::Stdout => None,
        ApplyTarget::File(path) => Some(path.clone()),
        ApplyTarget::InPlace => Some(options.input.clone()),
    };
    if let Some(path) = &written_to {
        std::fs::write(path, &text).map_err(|source| InstantSqlVarsError::OutputWriteError {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote output");
    }

    Ok(ApplyResult {
        text,
        declarations,
        written_to,
    })
}

fn clock_for(date: Option<NaiveDate>) -> Box<dyn Clock> {
    match date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}
