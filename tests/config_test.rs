//! Integration tests for Settings config loading with layered precedence.
//!
//! These tests pass the global config path and the environment variables to
//! `load_layers` explicitly, so a developer's own `arbor.toml` or `ARBOR_*`
//! variables never affect them.

use std::fs;
use std::path::Path;

use config::Map;
use tempfile::TempDir;

use arbor::config::Settings;
use arbor::{ArborError, Node};

fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn sample() -> Node<()> {
    Node::builder("root", ())
        .build()
        .add_child(Node::builder("a", ()).build())
        .unwrap()
        .add_child(Node::builder("b", ()).build())
        .unwrap()
}

// ============================================================
// Defaults
// ============================================================

#[test]
fn given_no_sources_when_load_then_uses_defaults() {
    let settings = Settings::load_layers(None, None, env(&[])).expect("load settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(sample().render(&settings.render), "root --> [ a , b ]");
}

// ============================================================
// Local File
// ============================================================

#[test]
fn given_local_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arbor.toml");
    let content = r#"
[render]
arrow = " => "
separator = "; "
"#;
    fs::write(&path, content).unwrap();

    // Act
    let settings = Settings::load_layers(None, Some(&path), env(&[])).expect("load settings");

    // Assert: given keys replaced, the rest keep their defaults
    assert_eq!(settings.render.arrow, " => ");
    assert_eq!(settings.render.separator, "; ");
    assert_eq!(settings.render.open, "[ ");
    assert!(!settings.render.show_tags);
    assert_eq!(sample().render(&settings.render), "root => [ a; b ]");
}

#[test]
fn given_missing_local_file_when_load_then_errors() {
    let result = Settings::load_layers(None, Some(Path::new("/nonexistent/arbor.toml")), env(&[]));

    match result {
        Err(ArborError::Config { message }) => {
            assert!(message.contains("/nonexistent/arbor.toml"), "{}", message)
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_malformed_local_file_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "[render\narrow = ").unwrap();

    let result = Settings::load_layers(None, Some(&path), env(&[]));

    assert!(matches!(result, Err(ArborError::Config { .. })));
}

// ============================================================
// Environment Variables
// ============================================================

#[test]
fn given_env_vars_when_load_then_override_local_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("arbor.toml");
    fs::write(&path, "[render]\narrow = \" => \"\n").unwrap();

    // Act
    let settings = Settings::load_layers(
        None,
        Some(&path),
        env(&[
            ("ARBOR_RENDER__ARROW", " -> "),
            ("ARBOR_RENDER__SHOW_TAGS", "true"),
        ]),
    )
    .expect("load settings");

    // Assert
    assert_eq!(settings.render.arrow, " -> ");
    assert!(settings.render.show_tags);
}

#[test]
fn given_unrelated_env_vars_when_load_then_ignores_them() {
    let settings = Settings::load_layers(
        None,
        None,
        env(&[("HOME", "/tmp"), ("OTHER_RENDER__ARROW", "x")]),
    )
    .expect("load settings");

    assert_eq!(settings, Settings::default());
}

// ============================================================
// Global File
// ============================================================

#[test]
fn given_global_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("arbor.toml");
    fs::write(&global, "[render]\nopen = \"{ \"\nclose = \" }\"\n").unwrap();

    let settings = Settings::load_layers(Some(&global), None, env(&[])).expect("load settings");

    assert_eq!(sample().render(&settings.render), "root --> { a , b }");
}

#[test]
fn given_global_and_local_files_when_load_then_local_wins() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("global.toml");
    let local = dir.path().join("local.toml");
    fs::write(&global, "[render]\narrow = \" => \"\nshow_tags = true\n").unwrap();
    fs::write(&local, "[render]\narrow = \": \"\n").unwrap();

    // Act
    let settings =
        Settings::load_layers(Some(&global), Some(&local), env(&[])).expect("load settings");

    // Assert: local replaces arrow, global show_tags survives
    assert_eq!(settings.render.arrow, ": ");
    assert!(settings.render.show_tags);
}

#[test]
fn given_missing_global_file_when_load_then_skips_it() {
    let dir = TempDir::new().unwrap();
    let global = dir.path().join("absent.toml");

    let settings = Settings::load_layers(Some(&global), None, env(&[])).expect("load settings");

    assert_eq!(settings, Settings::default());
}
