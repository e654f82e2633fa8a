//! Tests that drive the compiled binary

use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::TestContext;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_instant-sql-vars"))
}

#[test]
fn test_cli_generate_file() {
    let ctx = TestContext::with_script("SELECT @isOpen, @count");
    let output = bin()
        .arg("generate")
        .arg(&ctx.script_path)
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "/* Instant SQL Variables */\r\nDECLARE @isOpen BIT = 'true' \r\nDECLARE @count INT = 1 \r\n"
    );
}

#[test]
fn test_cli_generate_stdin_with_options() {
    let mut child = bin()
        .args(["generate", "--line-endings", "any", "--dedupe", "--date", "2024-02-03"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"SELECT @startDate\nWHERE @startDate < GETDATE()\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "/* Instant SQL Variables */\r\nDECLARE @startDate DATETIME = '2/3/2024' \r\n"
    );
}

/// Run `generate` with `args`, feeding `input` on stdin; returns (success, stdout, stderr).
fn generate_stdin(args: &[&str], input: &[u8]) -> (bool, String, String) {
    let mut child = bin()
        .arg("generate")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");
    child.stdin.take().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_cli_generate_stdin_strips_bom() {
    let (ok, stdout, stderr) = generate_stdin(&[], b"\xEF\xBB\xBF@orderId");
    assert!(ok, "{stderr}");
    assert_eq!(stdout, "/* Instant SQL Variables */\r\nDECLARE @orderId INT = 1 \r\n");
}

#[test]
fn test_cli_generate_stdin_windows_1252() {
    let (ok, stdout, stderr) = generate_stdin(&[], b"@caf\xE9Name");
    assert!(ok, "{stderr}");
    assert_eq!(
        stdout,
        "/* Instant SQL Variables */\r\nDECLARE @caf\u{e9}Name VARCHAR(MAX) = 'myValue' \r\n"
    );
}

#[test]
fn test_cli_generate_keyword_declare_mode() {
    let (ok, stdout, stderr) =
        generate_stdin(&["--declare-mode", "keyword"], b"DECLARE @total INT = @base");
    assert!(ok, "{stderr}");
    assert_eq!(stdout, "/* Instant SQL Variables */\r\nDECLARE @base INT = 1 \r\n");

    let (ok, stdout, _) = generate_stdin(&[], b"DECLARE @total INT = @base");
    assert!(ok);
    assert_eq!(stdout, "/* Instant SQL Variables */\r\n");
}

#[test]
fn test_cli_apply_in_place() {
    let ctx = TestContext::with_script("SELECT @id");
    let status = bin()
        .arg("apply")
        .arg(&ctx.script_path)
        .arg("--in-place")
        .status()
        .expect("Failed to run binary");

    assert!(status.success());
    assert_eq!(
        ctx.read_script(),
        "/* Instant SQL Variables */\r\nDECLARE @id INT = 1 \r\n\nSELECT @id"
    );
}

#[test]
fn test_cli_rejects_malformed_line_range() {
    let ctx = TestContext::with_script("SELECT @id");
    let output = bin()
        .arg("apply")
        .arg(&ctx.script_path)
        .args(["--lines", "3"])
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("FIRST:LAST"));
}
