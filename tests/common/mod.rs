//! Common test utilities for instant-sql-vars tests

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use instant_sql_vars::{ApplyOptions, ApplyTarget, SynthOptions};

/// Test context holding a SQL script in an isolated temp directory
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub dir: PathBuf,
    pub script_path: PathBuf,
}

impl TestContext {
    /// Write `content` to `script.sql` in a fresh temp directory
    pub fn with_script(content: impl AsRef<[u8]>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().to_path_buf();
        let script_path = dir.join("script.sql");
        fs::write(&script_path, content).expect("Failed to write script");

        Self {
            _temp_dir: temp_dir,
            dir,
            script_path,
        }
    }

    /// Apply options for the script with a pinned date and stdout target
    pub fn apply_options(&self) -> ApplyOptions {
        ApplyOptions {
            input: self.script_path.clone(),
            lines: None,
            target: ApplyTarget::Stdout,
            synth: SynthOptions::default(),
            date: Some(test_date()),
        }
    }

    /// Current contents of the script on disk
    pub fn read_script(&self) -> String {
        fs::read_to_string(&self.script_path).expect("Failed to read script")
    }
}

/// Date used for DATETIME placeholders in tests
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
}
