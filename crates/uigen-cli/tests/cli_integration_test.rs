//! Integration tests for the CLI commands against the bundled schema.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uigen_cli::commands::generate::{Overrides, generate_project};
use uigen_cli::commands::inspect::inspect_schema;
use uigen_cli::exit_code_for;
use uigen_cli::formatters::format_output;
use uigen_core::cli::{ExitCode, OutputFormat};

fn message_schema() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../schemas/message.toml"))
}

#[test]
fn test_inspect_message_schema() {
    let inspection = inspect_schema(&message_schema(), None).unwrap();

    let names: Vec<_> = inspection.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Message", "Provider"]);
    assert_eq!(inspection.models[0].attrs.len(), 9);

    let sections: Vec<_> = inspection.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(sections, ["messages", "providers", "dashboard"]);

    let json = format_output(&inspection, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["models"][0]["attrs"][0]["name"], "id");
    assert_eq!(value["sections"][1]["views"], serde_json::json!(["list", "view", "edit"]));
}

#[test]
fn test_generate_message_schema_with_clear() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("frontend");
    fs::create_dir_all(dest.join("old")).unwrap();
    fs::write(dest.join("old/stale.vue"), "<template />").unwrap();

    // The document itself asks for clearing
    let overrides = Overrides {
        dest: Some(dest.clone()),
        ..Overrides::default()
    };
    let summary = generate_project(&message_schema(), &overrides).unwrap();

    assert!(summary.cleared);
    assert_eq!(summary.sections, 3);
    assert!(!dest.join("old").exists());
    assert!(dest.join("src/views/DashboardPage.vue").is_file());

    let api = fs::read_to_string(dest.join("src/api/messages.ts")).unwrap();
    assert!(api.contains("'/api/v1/messages'"));

    let text = format_output(&summary, OutputFormat::Text).unwrap();
    assert!(text.contains("cleared: true"));
    assert!(text.contains("  - src/router.ts"));
}

#[test]
fn test_broken_skeleton_maps_to_template_exit_code() {
    let dir = TempDir::new().unwrap();
    let skeleton = dir.path().join("skeleton");
    fs::create_dir_all(&skeleton).unwrap();
    fs::write(skeleton.join("vite.config.ts"), "export default {}\n").unwrap();

    let overrides = Overrides {
        dest: Some(dir.path().join("out")),
        skeleton: Some(skeleton),
        ..Overrides::default()
    };
    let err = generate_project(&message_schema(), &overrides).unwrap_err();

    assert_eq!(exit_code_for(&err), ExitCode::TEMPLATE_MISSING);
    assert!(format!("{err:#}").contains("failed to generate into"));
}

#[test]
fn test_missing_skeleton_dir_maps_to_invalid_input() {
    let dir = TempDir::new().unwrap();
    let overrides = Overrides {
        dest: Some(dir.path().join("out")),
        skeleton: Some(dir.path().join("nowhere")),
        ..Overrides::default()
    };
    let err = generate_project(&message_schema(), &overrides).unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
}
