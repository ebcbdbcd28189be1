use parley_domain::config::{LogConfig, ShellConfig, ShellConfigInner};
use serde_json::json;

#[test]
fn defaults_are_quiet_console_logging() {
    let log = LogConfig::default();
    assert_eq!(log.level, "warn");
    assert!(log.filter.is_none());
    assert!(log.directory.is_none());
    assert!(!log.json);

    let shell = ShellConfig::default();
    assert!(shell.overrides.is_empty());
    assert_eq!(shell.overrides_for("asr.wsj.WsjGrapheme").count(), 0);
}

#[test]
fn shell_config_deserializes_with_partial_sections() {
    let raw = json!({
        "log": { "level": "debug", "directory": "/tmp/parley" },
        "overrides": [
            { "key": "mt.wmt14_en_de.WmtEnDeTransformerBase", "set": ["train.learning_rate=0.5"] },
            { "key": "asr.wsj.WsjGrapheme", "set": ["train.max_steps=10"] },
            { "key": "mt.wmt14_en_de.WmtEnDeTransformerBase", "set": ["encoder.num_layers=8"] }
        ]
    });

    let cfg: ShellConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.directory, Some(std::path::PathBuf::from("/tmp/parley")));
    assert!(cfg.log.ansi, "missing fields fall back to defaults");

    let assignments: Vec<&str> =
        cfg.overrides_for("mt.wmt14_en_de.WmtEnDeTransformerBase").collect();
    assert_eq!(assignments, ["train.learning_rate=0.5", "encoder.num_layers=8"]);
}

#[test]
fn clones_share_the_loaded_config() {
    let mut inner = ShellConfigInner::default();
    inner.log.level = "trace".to_owned();
    let original = ShellConfig::from(inner);
    let copy = original.clone();

    assert_eq!(copy.log.level, "trace");
    assert!(std::ptr::eq(&*original, &*copy));
}
