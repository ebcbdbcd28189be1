use parley_asr::params::librispeech::{Librispeech960Grapheme, Librispeech960Wpm};
use parley_asr::params::wsj::WsjGrapheme;
use parley_asr::{AsrError, register};
use parley_registry::{ConfigKey, Experiment, Registry, RegistryError};

const KEYS: [&str; 3] = [
    "asr.librispeech.Librispeech960Grapheme",
    "asr.librispeech.Librispeech960Wpm",
    "asr.wsj.WsjGrapheme",
];

fn registry() -> Registry {
    let registry = Registry::new();
    register(&registry).unwrap();
    registry
}

#[test]
fn test_keys_follow_module_paths() {
    let registry = registry();
    assert_eq!(registry.list_keys(Some("asr.")).to_vec(), KEYS);
    assert_eq!(ConfigKey::of::<WsjGrapheme>().unwrap().as_str(), KEYS[2]);
}

#[test]
fn test_every_experiment_and_split_materializes() {
    let registry = registry();
    for key in KEYS {
        assert_eq!(registry.datasets(key).unwrap(), ["Dev", "Test", "Train"]);
        let model = registry.get(key).unwrap();
        assert!(model.contains("encoder.num_lstm_layers"), "{key}");

        for dataset in registry.datasets(key).unwrap() {
            let params = registry.get_for_dataset(key, &dataset).unwrap();
            assert!(params.contains("input.file_pattern"), "{key}/{dataset}");
            assert_eq!(params.get("encoder").unwrap(), model.get("encoder").unwrap());
        }
    }
}

#[test]
fn test_wpm_overrides_grapheme_defaults() {
    let grapheme = Librispeech960Grapheme::model().unwrap();
    let wpm = Librispeech960Wpm::model().unwrap();

    assert_eq!(grapheme.get("decoder.target_vocab_size").unwrap().as_i64(), Some(76));
    assert_eq!(wpm.get("decoder.target_vocab_size").unwrap().as_i64(), Some(16384));
    assert_eq!(wpm.get("encoder").unwrap(), grapheme.get("encoder").unwrap());

    let registry = registry();
    let train = registry.get_for_dataset(KEYS[1], "Train").unwrap();
    assert_eq!(train.get("input.tokenizer.kind").unwrap().as_str(), Some("wpm"));
    assert_eq!(train.get("input.shuffle").unwrap().as_bool(), Some(true));

    let test = registry.get_for_dataset(KEYS[1], "Test").unwrap();
    assert_eq!(test.get("input.shuffle").unwrap().as_bool(), Some(false));
}

#[test]
fn test_wsj_is_smaller_than_librispeech() {
    let wsj = WsjGrapheme::model().unwrap();
    assert_eq!(wsj.get("encoder.num_lstm_layers").unwrap().as_i64(), Some(3));
    assert_eq!(wsj.get("decoder.source_dim").unwrap().as_i64(), Some(512));
    assert_eq!(wsj.get("train.max_steps").unwrap().as_i64(), Some(120_000));
}

#[test]
fn test_registering_twice_fails() {
    let registry = registry();
    let err = register(&registry).unwrap_err();
    assert!(matches!(
        err,
        AsrError::Registry { source: RegistryError::DuplicateRegistration { .. }, .. }
    ));
    assert_eq!(registry.len(), KEYS.len());
}
