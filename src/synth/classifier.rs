//! Name-pattern classification of variables into SQL Server data types.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static TEXT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:code|info|name|label)$").unwrap());
static DATE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:date|dt)$").unwrap());
static BIT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^@is").unwrap());

/// Data type chosen for a declared variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlDataType {
    VarcharMax,
    DateTime,
    Bit,
    Int,
}

impl SqlDataType {
    /// T-SQL spelling used in the rendered declaration.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlDataType::VarcharMax => "VARCHAR(MAX)",
            SqlDataType::DateTime => "DATETIME",
            SqlDataType::Bit => "BIT",
            SqlDataType::Int => "INT",
        }
    }
}

impl fmt::Display for SqlDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Type and placeholder literal inferred for one variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub data_type: SqlDataType,
    /// Literal emitted after `=`, already quoted where needed.
    pub placeholder: String,
}

/// Classify a sanitized variable name. First matching rule wins:
///
/// 1. ends with `code`, `info`, `name` or `label` → `VARCHAR(MAX)`, `'myValue'`
/// 2. ends with `date` or `dt` → `DATETIME`, `today` as `'M/D/YYYY'`
/// 3. starts with `@is` → `BIT`, `'true'`
/// 4. otherwise `INT`, `1`
///
/// All matches are case-insensitive.
pub fn classify_variable(name: &str, today: NaiveDate) -> Classification {
    if TEXT_SUFFIX_RE.is_match(name) {
        Classification {
            data_type: SqlDataType::VarcharMax,
            placeholder: "'myValue'".to_string(),
        }
    } else if DATE_SUFFIX_RE.is_match(name) {
        Classification {
            data_type: SqlDataType::DateTime,
            placeholder: format_us_date(today),
        }
    } else if BIT_PREFIX_RE.is_match(name) {
        Classification {
            data_type: SqlDataType::Bit,
            placeholder: "'true'".to_string(),
        }
    } else {
        Classification {
            data_type: SqlDataType::Int,
            placeholder: "1".to_string(),
        }
    }
}

/// US numeric date without zero padding, quoted: `'3/7/2024'`.
fn format_us_date(date: NaiveDate) -> String {
    format!("'{}/{}/{}'", date.month(), date.day(), date.year())
}
