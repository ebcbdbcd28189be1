use parley_domain::config::ShellConfigInner;
use parley_kernel::config::{ConfigError, load_config};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = r#"
[log]
level = "debug"
json = true

[[overrides]]
key = "asr.wsj.WsjGrapheme"
set = ["train.max_steps=100", "encoder.num_layers=3"]
"#;

#[test]
#[serial]
fn explicit_file_is_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("parley.toml");
    fs::write(&path, SAMPLE)?;

    let cfg: ShellConfigInner = load_config(Some(path.as_path()))?;
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.json);
    assert!(cfg.log.directory.is_none());
    assert_eq!(cfg.overrides.len(), 1);
    assert_eq!(cfg.overrides[0].key, "asr.wsj.WsjGrapheme");
    assert_eq!(cfg.overrides[0].set, ["train.max_steps=100", "encoder.num_layers=3"]);
    Ok(())
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<ShellConfigInner>(Some(path.as_path())).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
#[serial]
fn no_file_falls_back_to_defaults() -> Result<(), ConfigError> {
    let cfg: ShellConfigInner = load_config(None)?;
    assert_eq!(cfg.log.level, "warn");
    assert!(cfg.overrides.is_empty());
    Ok(())
}
