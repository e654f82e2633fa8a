//! Editor integration
//!
//! The host editor is reached through [`EditorHost`] and [`EditorPort`], so
//! the commands run the same against a live editor binding or the in-memory
//! [`BufferEditor`].

mod buffer;
mod commands;
mod port;

pub use buffer::BufferEditor;
pub use commands::{apply_to_document, apply_to_selection, CommandOutcome};
pub use port::{EditorHost, EditorPort, Selection, TextRange};
