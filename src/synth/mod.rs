//! Variable declaration synthesis
//!
//! Scans SQL text for `@variable` tokens and renders a block of `DECLARE`
//! statements with types and placeholder values inferred from the names.

mod classifier;
mod clock;
mod declaration;
mod options;
mod scanner;

pub use classifier::{classify_variable, Classification, SqlDataType};
pub use clock::{Clock, FixedClock, SystemClock};
pub use declaration::{Declaration, DeclarationBlock, DECLARATION_HEADER, LINE_TERMINATOR};
pub use options::{DeclareSuppression, LineEndings, SynthOptions};
pub use scanner::{sanitize_variable, scan_variables, VariableToken};

use std::collections::HashSet;

/// Generate the declaration block for `sql` using the default options and the
/// system clock.
///
/// Never fails: empty or non-SQL input yields just the header line.
pub fn generate_declarations(sql: &str) -> String {
    generate_declarations_with(sql, &SynthOptions::default(), &SystemClock)
}

/// Generate the declaration block for `sql` with explicit options and clock.
pub fn generate_declarations_with(sql: &str, options: &SynthOptions, clock: &dyn Clock) -> String {
    build_declaration_block(sql, options, clock).to_string()
}

/// Scan, sanitize and classify every candidate variable into a [`DeclarationBlock`].
pub fn build_declaration_block(
    sql: &str,
    options: &SynthOptions,
    clock: &dyn Clock,
) -> DeclarationBlock {
    let today = clock.today();
    let mut seen = HashSet::new();
    let mut block = DeclarationBlock::new();

    for token in scan_variables(sql, options) {
        let name = sanitize_variable(&token.raw);
        if options.deduplicate && !seen.insert(name.clone()) {
            tracing::trace!(name = %name, line = token.line, "skipping repeated variable");
            continue;
        }
        let classification = classify_variable(&name, today);
        tracing::debug!(
            name = %name,
            data_type = %classification.data_type,
            line = token.line,
            position = token.position,
            "declaring variable"
        );
        block.push(Declaration::new(name, classification));
    }

    block
}
