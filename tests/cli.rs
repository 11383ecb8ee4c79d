//! CLI integration tests for smali-xor
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SMALI: &str = "\
.class public Lcom/example/Strings;
.super Ljava/lang/Object;

.method private static a()[S
    .registers 1

    :array_0
    .array-data 2
        0x1702s
        0x172fs
        0x1726s
        0x1726s
        0x1725s
    .end array-data
.end method
";

fn smali_xor() -> Command {
    Command::cargo_bin("smali-xor").unwrap()
}

fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Strings.smali");
    fs::write(&path, SMALI).unwrap();
    (dir, path)
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    smali_xor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("XOR-masked strings"));
}

#[test]
fn test_version() {
    smali_xor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("smali-xor"));
}

#[test]
fn test_config_shows_defaults() {
    smali_xor()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("marker = \"s\""))
        .stdout(predicate::str::contains("suffix = \".backup\""));
}

#[test]
fn test_config_json_with_marker_override() {
    smali_xor()
        .args(["--marker", "t", "config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"marker\": \"t\""));
}

// ============================================================================
// Extract / Decode / Encode
// ============================================================================

#[test]
fn test_extract() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 literals"))
        .stdout(predicate::str::contains("First 5: 0x1702s 0x172fs"));
}

#[test]
fn test_extract_json() {
    let (_dir, path) = fixture();
    let output = smali_xor()
        .args(["extract", "--json"])
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["count"], 5);
    assert_eq!(json["tokens"][4], "0x1725s");
}

#[test]
fn test_extract_file_without_literals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Empty.smali");
    fs::write(&path, ".class public LEmpty;\n").unwrap();

    smali_xor()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no array-data literals found"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_decode_hex_fields() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["--start", "0", "--end", "0x5", "--key", "0x174a"])
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_decode_mixed_bases() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["-s", "1", "--start-base", "dec", "-e", "3", "--end-base", "dec"])
        .args(["-k", "5962", "--key-base", "dec"])
        .assert()
        .success()
        .stdout("el\n");
}

#[test]
fn test_decode_end_is_clamped() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["-s", "3", "-e", "ff", "-k", "174a"])
        .assert()
        .success()
        .stdout("lo\n");
}

#[test]
fn test_decode_verbose_range() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["-s", "0", "-e", "2", "-k", "0x174a", "--verbose-range"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Range 0-2 with XOR key 0x174a:"))
        .stdout(predicate::str::contains("Hex values: 0x0048 0x0065"))
        .stdout(predicate::str::contains("Decoded: He"));
}

#[test]
fn test_decode_invalid_numeral() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["-s", "0x", "-e", "2", "-k", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hex numeral '0x'"));
}

#[test]
fn test_decode_wrong_key_reports_code_point() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("A.smali");
    fs::write(&path, "0xd800s\n").unwrap();

    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["-s", "0", "-e", "1", "-k", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid Unicode scalar value"));
}

#[test]
fn test_encode_tokens() {
    smali_xor()
        .args(["encode", "Hi", "--key", "0x20"])
        .assert()
        .success()
        .stdout("0x0068s\n0x0049s\n");
}

#[test]
fn test_encode_preview() {
    smali_xor()
        .args(["encode", "Hi", "--key", "0x20", "--preview"])
        .assert()
        .success()
        .stdout("0x0068 0x0049\n");
}

// ============================================================================
// Edit / Export / Inspect
// ============================================================================

#[test]
fn test_edit_writes_backup_and_file() {
    let (dir, path) = fixture();
    smali_xor()
        .arg("edit")
        .arg(&path)
        .args(["-s", "0", "-e", "5", "-k", "0x174a", "-t", "World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated range 0-5 with 5 characters"))
        .stderr(predicate::str::contains("Current: Hello"));

    let backup = dir.path().join("Strings.smali.backup");
    assert_eq!(fs::read_to_string(&backup).unwrap(), SMALI);

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("        0x171ds\n"));
    assert!(saved.starts_with(".class public Lcom/example/Strings;\n"));

    smali_xor()
        .arg("decode")
        .arg(&path)
        .args(["-s", "0", "-e", "5", "-k", "0x174a"])
        .assert()
        .success()
        .stdout("World\n");
}

#[test]
fn test_edit_dry_run_leaves_file() {
    let (dir, path) = fixture();
    smali_xor()
        .arg("edit")
        .arg(&path)
        .args(["-s", "3", "-k", "0x20", "-t", "abc", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would update range 3-5 with 2 characters"))
        .stdout(predicate::str::contains("0x0041s"));

    assert_eq!(fs::read_to_string(&path).unwrap(), SMALI);
    assert!(!dir.path().join("Strings.smali.backup").exists());
}

#[test]
fn test_edit_empty_text_rejected() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("edit")
        .arg(&path)
        .args(["-s", "0", "-k", "0", "-t", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("replacement string is empty"));

    assert_eq!(fs::read_to_string(&path).unwrap(), SMALI);
}

#[test]
fn test_export() {
    let (dir, path) = fixture();
    let out = dir.path().join("array.txt");
    smali_xor()
        .arg("export")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "0x1702s\n0x172fs\n0x1726s\n0x1726s\n0x1725s\n"
    );

    // An exported listing decodes like the source it came from.
    smali_xor()
        .arg("decode")
        .arg(&out)
        .args(["-s", "0", "-e", "5", "-k", "0x174a"])
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_inspect_default_keys() {
    let (_dir, path) = fixture();
    smali_xor()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0x174a | 0x5072 | 0x0000"))
        .stdout(predicate::str::contains("H | ? | ?"));
}

#[test]
fn test_inspect_json_custom_keys() {
    let (_dir, path) = fixture();
    let output = smali_xor()
        .arg("inspect")
        .arg(&path)
        .args(["--keys", "174a,0", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["keys"], serde_json::json!([0x174a, 0]));
    assert_eq!(json["rows"][1]["value"], 0x172f);
    assert_eq!(json["rows"][1]["samples"], serde_json::json!(["e", "?"]));
}

#[test]
fn test_size_limit() {
    let (_dir, path) = fixture();
    smali_xor()
        .args(["--max-size", "10", "extract"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("byte limit"));

    smali_xor()
        .args(["--max-size", "10", "--force", "extract"])
        .arg(&path)
        .assert()
        .success();
}
