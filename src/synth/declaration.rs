//! Rendering of `DECLARE` statements.

use std::fmt;

use super::classifier::Classification;

/// Comment line that opens every generated block.
pub const DECLARATION_HEADER: &str = "/* Instant SQL Variables */";

/// Terminator written after the header and after each declaration.
pub const LINE_TERMINATOR: &str = "\r\n";

/// One `DECLARE <name> <type> = <placeholder>` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub classification: Classification,
}

impl Declaration {
    pub fn new(name: String, classification: Classification) -> Self {
        Self {
            name,
            classification,
        }
    }
}

impl fmt::Display for Declaration {
    // The trailing space before the terminator is part of the output format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DECLARE {} {} = {} ",
            self.name, self.classification.data_type, self.classification.placeholder
        )
    }
}

/// Header plus declarations in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DECLARATION_HEADER}{LINE_TERMINATOR}")?;
        for declaration in &self.declarations {
            write!(f, "{declaration}{LINE_TERMINATOR}")?;
        }
        Ok(())
    }
}
