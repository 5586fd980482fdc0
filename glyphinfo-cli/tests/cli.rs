//! End-to-end tests for the glyph_info_to_json binary

use glyphinfo::testfont::TestFont;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(font_file: &Path, output_json: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyph_info_to_json"))
        .env_remove("RUST_LOG")
        .arg("-f")
        .arg(font_file)
        .arg("-o")
        .arg(output_json)
        .output()
        .expect("failed to run glyph_info_to_json")
}

#[test]
fn test_success_is_silent_and_writes_json() {
    let dir = TempDir::new().unwrap();
    let font_file = dir.path().join("test.ttf");
    std::fs::write(
        &font_file,
        TestFont::new()
            .family("Cli Sans")
            .glyph(Some('A'), 600, 0)
            .build(),
    )
    .unwrap();
    let output_json = dir.path().join("test.json");

    let output = run(&font_file, &output_json);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stderr.is_empty());
    assert!(output.stdout.is_empty());
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_json).unwrap()).unwrap();
    assert_eq!(written["fontFamily"], "Cli Sans");
    assert_eq!(written["glyphs"][0]["advanceWidth"], 600);
}

#[test]
fn test_missing_font_exits_with_status_1() {
    let dir = TempDir::new().unwrap();
    let output_json = dir.path().join("test.json");

    let output = run(&dir.path().join("missing.ttf"), &output_json);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error extracting glyph info: Failed to load font file"),
        "stderr: {}",
        stderr
    );
    assert!(!output_json.exists());
}

#[test]
fn test_missing_output_directory_exits_with_status_1() {
    let dir = TempDir::new().unwrap();
    let font_file = dir.path().join("test.ttf");
    std::fs::write(&font_file, TestFont::new().glyph(Some('A'), 600, 0).build()).unwrap();

    let output = run(&font_file, &dir.path().join("nowhere").join("test.json"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error extracting glyph info: Failed to output to"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_no_flags_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_glyph_info_to_json"))
        .output()
        .expect("failed to run glyph_info_to_json");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load font file"));
}

#[test]
fn test_help_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_glyph_info_to_json"))
        .arg("--help")
        .output()
        .expect("failed to run glyph_info_to_json");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--font_file"));
    assert!(stdout.contains("--output_json"));
}
