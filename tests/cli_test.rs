use anyhow::Result;
use serde_json::json;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn splitter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ui-splitter"))
}

#[test]
fn test_cli_success() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("ui.json");
    let output = temp_dir.path().join("split_ui");
    fs::write(
        &input,
        json!({"layout": {"children": [{"name": "Header"}, {"type": "spacer"}]}}).to_string(),
    )?;

    let result = splitter().arg(&input).arg(&output).output()?;
    assert_eq!(result.status.code(), Some(0));

    let stdout = String::from_utf8(result.stdout)?;
    assert!(stdout.contains(&format!("Converting: {}", input.display())));
    assert!(stdout.contains(&format!("Output directory: {}", output.display())));
    assert!(stdout.contains(&"-".repeat(50)));
    assert!(stdout.contains("Found 2 children to convert:"));
    assert!(stdout.contains("✓ Created: Header.json"));
    assert!(stdout.contains("✓ Created: child_1.json"));
    assert!(stdout.contains("Conversion successful!"));

    assert!(output.join("Header.json").is_file());
    assert!(output.join("child_1.json").is_file());
    Ok(())
}

#[test]
fn test_cli_invalid_json_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("ui.json");
    let output = temp_dir.path().join("split_ui");
    fs::write(&input, "not json")?;

    let result = splitter().arg(&input).arg(&output).output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8(result.stdout)?;
    assert!(stdout.contains("Error: Invalid JSON in"));
    assert!(stdout.contains("Conversion failed!"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_cli_missing_structure_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("ui.json");
    let output = temp_dir.path().join("split_ui");
    fs::write(&input, r#"{"layout": {}}"#)?;

    let result = splitter().arg(&input).arg(&output).output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8(result.stdout)?;
    assert!(stdout.contains("Expected 'layout.children' structure"));
    assert_eq!(fs::read_dir(&output)?.count(), 0);
    Ok(())
}

#[test]
fn test_cli_missing_input_exits_with_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("missing.json");

    let result = splitter()
        .arg(&input)
        .arg(temp_dir.path().join("out"))
        .output()?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8(result.stdout)?;
    assert!(stdout.contains("not found"));
    Ok(())
}
