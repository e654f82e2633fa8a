//! Reading SQL scripts from disk or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::Result;
use encoding_rs::WINDOWS_1252;

use crate::error::InstantSqlVarsError;

/// Read a SQL file and decode it with [`decode_sql_bytes`].
pub fn read_sql_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| InstantSqlVarsError::SqlFileReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_sql_bytes(bytes))
}

/// Read all of `reader` and decode it with [`decode_sql_bytes`].
pub fn read_sql_stream(mut reader: impl Read) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_sql_bytes(bytes))
}

/// Decode script bytes as UTF-8, falling back to Windows-1252.
///
/// Windows-1252 maps every byte, so the fallback accepts any input. A leading
/// UTF-8 byte order mark is stripped. Line endings are left as-is, since CRLF
/// is significant to the line splitter.
pub fn decode_sql_bytes(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        // Windows-1252 is common for SQL files saved by older SQL Server tooling
        Err(err) => WINDOWS_1252.decode_without_bom_handling(err.as_bytes()).0.into_owned(),
    };
    match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
