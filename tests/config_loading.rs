// tests/config_loading.rs

use std::io::Write;
use std::path::Path;

use supportkit::config::{ConfigFile, load_and_validate, load_from_path};
use supportkit::errors::SupportError;
use supportkit_test_utils::builders::{CommandConfigBuilder, ConfigFileBuilder};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_valid_config_loads_commands() {
    let file = write_config(
        r#"
[defaults]
dir = "/tmp"

[command.greet]
args = ["echo", "hello", "world"]

[command.list]
args = ["ls", "-la"]
dir = "/var"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    let names: Vec<&str> = cfg.command_names().collect();
    assert_eq!(names, vec!["greet", "list"]);

    let greet = cfg.command_spec("greet").unwrap();
    assert_eq!(greet.program(), Some("echo"));
    assert_eq!(greet.args(), ["hello".to_string(), "world".to_string()]);
    assert_eq!(greet.working_dir(), Some(Path::new("/tmp")));

    let list = cfg.command_spec("list").unwrap();
    assert_eq!(list.working_dir(), Some(Path::new("/var")));
}

#[test]
fn test_raw_load_does_not_validate() {
    let file = write_config("[defaults]\n");

    let raw = load_from_path(file.path()).unwrap();
    assert!(raw.command.is_empty());
}

#[test]
fn test_config_without_commands_is_rejected() {
    let file = write_config("[defaults]\ndir = \".\"\n");

    match load_and_validate(file.path()) {
        Err(SupportError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_empty_args_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .with_command("broken", CommandConfigBuilder::empty().build())
        .build_raw();

    match ConfigFile::try_from(raw) {
        Err(SupportError::ConfigError(msg)) => {
            assert!(msg.contains("broken"));
            assert!(msg.contains("empty `args`"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_blank_executable_is_rejected() {
    let raw = ConfigFileBuilder::new()
        .with_command("blank", CommandConfigBuilder::new("   ").arg("x").build())
        .build_raw();

    assert!(matches!(
        ConfigFile::try_from(raw),
        Err(SupportError::ConfigError(_))
    ));
}

#[test]
fn test_invalid_toml_is_a_toml_error() {
    let file = write_config("[command.x\nargs = [");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(SupportError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        load_and_validate(dir.path().join("nope.toml")),
        Err(SupportError::IoError(_))
    ));
}

#[test]
fn test_unknown_command_name() {
    let cfg = ConfigFileBuilder::new()
        .with_command("a", CommandConfigBuilder::new("true").build())
        .build();

    match cfg.command_spec("b") {
        Err(SupportError::CommandNotFound(name)) => assert_eq!(name, "b"),
        other => panic!("Expected CommandNotFound, got: {:?}", other),
    }
}

#[test]
fn test_effective_dir_falls_back_to_defaults() {
    let cfg = ConfigFileBuilder::new()
        .with_default_dir("base")
        .with_command("own", CommandConfigBuilder::new("true").dir("mine").build())
        .with_command("inherit", CommandConfigBuilder::new("true").build())
        .build();

    assert_eq!(cfg.effective_dir("own"), Some(Path::new("mine")));
    assert_eq!(cfg.effective_dir("inherit"), Some(Path::new("base")));
}

#[test]
fn test_no_dir_anywhere() {
    let cfg = ConfigFileBuilder::new()
        .with_command("plain", CommandConfigBuilder::new("true").build())
        .build();

    assert_eq!(cfg.command_spec("plain").unwrap().working_dir(), None);
}
