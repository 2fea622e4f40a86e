//! Integration tests for the ctconv CLI.
//!
//! ```sh
//! cargo test --test integration
//! ```

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TWO_ENTRY_TABLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<CheatTable CheatEngineTableVersion="45">
  <CheatEntries>
    <CheatEntry>
      <ID>0</ID>
      <Description>"Gold"</Description>
      <VariableType>4 Bytes</VariableType>
      <Address>0x1000</Address>
    </CheatEntry>
    <CheatEntry>
      <ID>1</ID>
      <Description>"Health"</Description>
      <VariableType>Float</VariableType>
      <Address>game.exe+1A2B3C</Address>
    </CheatEntry>
  </CheatEntries>
</CheatTable>
"#;

fn ctconv() -> Command {
    Command::cargo_bin("ctconv").unwrap()
}

fn write_table(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("table.CT");
    fs::write(&path, content).unwrap();
    path
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    ctconv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn test_version() {
    ctconv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_format_flag_fails() {
    ctconv()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}

// ============================================================================
// Conversions driven by flags
// ============================================================================

#[test]
fn test_json_conversion() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TWO_ENTRY_TABLE);
    let output = dir.path().join("table.json");

    ctconv()
        .args(["-n", "-i", arg(&input), "-o", arg(&output), "-f", "JSON"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 entries to"))
        .stderr(predicate::str::contains("(JSON)"));

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed[0]["title"], "Gold");
    assert_eq!(parsed[1]["details"]["VariableType"], "Float");
    assert_eq!(parsed[1]["details"]["Address"], "game.exe+1A2B3C");
}

#[test]
fn test_txt_conversion_creates_output_dirs() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TWO_ENTRY_TABLE);
    let output = dir.path().join("reports").join("2024").join("table.txt");

    ctconv()
        .args(["-n", "-i", arg(&input), "-o", arg(&output), "-f", "txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("(TXT)"));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "Gold\n  VariableType: 4 Bytes\n  Address: 0x1000\n\n\
         Health\n  VariableType: Float\n  Address: game.exe+1A2B3C\n"
    );
}

#[test]
fn test_pymem_conversion_forces_py_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TWO_ENTRY_TABLE);
    let output = dir.path().join("reader");

    ctconv()
        .args(["-n", "-i", arg(&input), "-o", arg(&output), "-f", "pymem"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote continuous Pymem reader to"))
        .stderr(predicate::str::contains("(2 entries)"));

    assert!(!output.exists());
    let script = fs::read_to_string(dir.path().join("reader.py")).unwrap();

    assert_eq!(script.matches("    value = pm.").count(), 2);
    assert!(script.contains("    addr = 0x1000\n    value = pm.read_int(addr)\n"));
    assert!(script.contains("    mod = module_from_name(pm.process_handle, 'game.exe')\n"));
    assert!(script.contains("    addr = mod.lpBaseOfDll + 0x1a2b3c\n    value = pm.read_float(addr)\n"));
    assert!(script.contains("    values['Health'] = value"));
}

#[test]
fn test_empty_table_writes_empty_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "<CheatTable><CheatEntries/></CheatTable>");
    let json = dir.path().join("empty.json");
    let txt = dir.path().join("empty.txt");
    let script = dir.path().join("empty.py");

    for (format, output) in [("json", &json), ("txt", &txt), ("pymem", &script)] {
        ctconv()
            .args(["-n", "-i", arg(&input), "-o", arg(output), "-f", format])
            .assert()
            .success();
    }

    assert_eq!(fs::read_to_string(&json).unwrap(), "[]");
    assert_eq!(fs::read_to_string(&txt).unwrap(), "");
    assert!(fs::read_to_string(&script)
        .unwrap()
        .contains("    values = {}\n    return values\n"));
}

#[test]
fn test_malformed_table_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, "<CheatTable><CheatEntries></CheatTable>");
    let output = dir.path().join("out.json");

    ctconv()
        .args(["-n", "-i", arg(&input), "-o", arg(&output), "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML"));

    assert!(!output.exists());
}

#[test]
fn test_unquoted_attribute_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_table(
        &dir,
        "<CheatTable><CheatEntries><CheatEntry ID=5><Description>X</Description>\
         </CheatEntry></CheatEntries></CheatTable>",
    );
    let output = dir.path().join("out.json");

    ctconv()
        .args(["-n", "-i", arg(&input), "-o", arg(&output), "-f", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML"));

    assert!(!output.exists());
}

#[test]
fn test_summary_ignores_rust_log() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TWO_ENTRY_TABLE);
    let output = dir.path().join("table.txt");

    ctconv()
        .env("RUST_LOG", "error")
        .args(["-n", "-i", arg(&input), "-o", arg(&output), "-f", "txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 entries to"));
}

// ============================================================================
// Interactive prompts
// ============================================================================

#[test]
fn test_prompts_for_missing_values() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TWO_ENTRY_TABLE);
    let output = dir.path().join("prompted.json");

    ctconv()
        .arg("-n")
        .write_stdin(format!("\"{}\"\n{}\n  Json  \n", input.display(), output.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter input .ct file path: "))
        .stdout(predicate::str::contains("Enter output file path: "))
        .stdout(predicate::str::contains("Output format (json/txt/pymem): "));

    assert!(output.exists());
}

#[test]
fn test_missing_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("never.json");

    ctconv()
        .args(["-n", "-o", arg(&output), "-f", "json"])
        .write_stdin("/nonexistent/table.CT\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_prompted_format_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let input = write_table(&dir, TWO_ENTRY_TABLE);
    let output = dir.path().join("never.out");

    ctconv()
        .args(["-n", "-i", arg(&input), "-o", arg(&output)])
        .write_stdin("xml\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid format"));

    assert!(!output.exists());
}
