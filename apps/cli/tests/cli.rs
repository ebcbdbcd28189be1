use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn parley() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_parley"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_prints_sorted_keys() {
    let output = parley().arg("list").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let keys: Vec<&str> = stdout.lines().collect();

    assert_eq!(keys.len(), 6);
    assert_eq!(keys[0], "asr.librispeech.Librispeech960Grapheme");
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_list_filters_by_prefix() {
    parley()
        .args(["list", "mt.wmt14_en_fr."])
        .assert()
        .success()
        .stdout("mt.wmt14_en_fr.WmtEnFrTransformerBig\n");

    parley()
        .args(["list", "lm."])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No configurations match 'lm.'"));
}

#[test]
fn test_show_prints_params_text() {
    parley()
        .args(["show", "asr.wsj.WsjGrapheme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("encoder.num_lstm_layers : 3\n"))
        .stdout(predicate::str::contains("name : \"wsj\"\n"));
}

#[test]
fn test_show_with_dataset_and_overrides() {
    parley()
        .args(["show", "asr.wsj.WsjGrapheme", "--dataset", "Dev"])
        .args(["--set", "train.learning_rate=0.5", "-s", "input.tokenizer.kind=wpm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input.file_pattern : \"wsj/dev93/*.tfrecords\""))
        .stdout(predicate::str::contains("train.learning_rate : 0.5\n"))
        .stdout(predicate::str::contains("input.tokenizer.kind : \"wpm\"\n"));
}

#[test]
fn test_show_json_is_parseable() {
    let output = parley()
        .args(["show", "mt.wmt14_en_de.WmtEnDeTransformerBase", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["encoder"]["model_dim"], 512);
    assert_eq!(value["decoder"]["beam_size"], 4);
}

#[test]
fn test_unknown_key_fails_with_suggestions() {
    parley()
        .args(["show", "asr.wsj.WsjGraphem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("asr.wsj.WsjGraphem"))
        .stderr(predicate::str::contains("did you mean: asr.wsj.WsjGrapheme"));
}

#[test]
fn test_undefined_override_fails() {
    parley()
        .args(["show", "asr.wsj.WsjGrapheme", "--set", "encoder.num_heads=4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("encoder.num_heads"));
}

#[test]
fn test_datasets_lists_splits() {
    parley()
        .args(["datasets", "mt.wmt14_en_de.WmtEnDeRnmt"])
        .assert()
        .success()
        .stdout("Dev\nTest\nTrain\n");

    parley()
        .args(["show", "mt.wmt14_en_de.WmtEnDeRnmt", "--dataset", "Valid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dev, Test, Train"));
}

#[test]
fn test_config_overrides_apply_before_cli() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parley.toml");
    fs::write(
        &path,
        r#"
[log]
level = "error"

[[overrides]]
key = "asr.wsj.WsjGrapheme"
set = ["train.max_steps=10", "train.learning_rate=0.25"]

[[overrides]]
key = "mt.wmt14_en_de.WmtEnDeRnmt"
set = ["train.max_steps=99"]
"#,
    )
    .unwrap();

    parley()
        .arg("--config")
        .arg(&path)
        .args(["show", "asr.wsj.WsjGrapheme", "--set", "train.learning_rate=0.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("train.max_steps : 10\n"))
        .stdout(predicate::str::contains("train.learning_rate : 0.75\n"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    parley()
        .args(["list", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_config_source_is_logged_once_logging_starts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parley.toml");
    fs::write(&path, "[log]\nlevel = \"debug\"\nansi = false\n").unwrap();

    parley()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded config file"))
        .stderr(predicate::str::contains(path.display().to_string()));
}

#[test]
fn test_unknown_log_level_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("parley.toml");
    fs::write(&path, "[log]\nlevel = \"loud\"\n").unwrap();

    parley()
        .arg("--config")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level 'loud'"));
}
