//! LibriSpeech 960h experiments.
use super::common::{self, EncoderShape, Split};
use parley_domain::constants::{DEV, TEST, TRAIN};
use parley_kernel::params::{ParamValue, Params, ParamsError};
use parley_registry::{DatasetFn, Experiment};

const WPM_VOCAB_SIZE: i64 = 16384;
const WPM_VOCAB: &str = "librispeech/wpm_16k.vocab";

fn train() -> Result<Params, ParamsError> {
    common::input(Split {
        file_pattern: "librispeech/train/train.tfrecords-*",
        num_samples: 281_241,
        bucket_batch_limit: common::train_batches(),
        shuffle: true,
    })
}

fn dev() -> Result<Params, ParamsError> {
    common::input(Split {
        file_pattern: "librispeech/devtest/dev-clean.tfrecords-*",
        num_samples: 2_703,
        bucket_batch_limit: common::eval_batches(),
        shuffle: false,
    })
}

fn test() -> Result<Params, ParamsError> {
    common::input(Split {
        file_pattern: "librispeech/devtest/test-clean.tfrecords-*",
        num_samples: 2_620,
        bucket_batch_limit: common::eval_batches(),
        shuffle: false,
    })
}

/// Listen-attend-spell over graphemes.
#[derive(Debug)]
pub struct Librispeech960Grapheme;

impl Experiment for Librispeech960Grapheme {
    fn model() -> Result<Params, ParamsError> {
        let shape = EncoderShape { num_lstm_layers: 4, lstm_cell_size: 1024 };
        common::model(
            "librispeech",
            common::encoder(&shape)?,
            common::decoder(2 * shape.lstm_cell_size, 1024)?,
            common::learner(2.5e-4, 800_000)?,
        )
    }

    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        vec![(TRAIN, train as DatasetFn), (DEV, dev as DatasetFn), (TEST, test as DatasetFn)]
    }
}

fn with_wpm(mut input: Params) -> Result<Params, ParamsError> {
    input.apply_overrides([
        ("tokenizer.kind", ParamValue::from("wpm")),
        ("tokenizer.vocab_size", ParamValue::from(WPM_VOCAB_SIZE)),
        ("tokenizer.vocab_filepath", ParamValue::from(WPM_VOCAB)),
        ("target_max_length", ParamValue::from(140)),
    ])?;
    Ok(input)
}

fn wpm_train() -> Result<Params, ParamsError> {
    with_wpm(train()?)
}

fn wpm_dev() -> Result<Params, ParamsError> {
    with_wpm(dev()?)
}

fn wpm_test() -> Result<Params, ParamsError> {
    with_wpm(test()?)
}

/// The grapheme model retargeted to a 16k word-piece vocabulary.
#[derive(Debug)]
pub struct Librispeech960Wpm;

impl Experiment for Librispeech960Wpm {
    fn model() -> Result<Params, ParamsError> {
        let mut p = Librispeech960Grapheme::model()?;
        p.set("name", "librispeech_wpm")?;
        p.set("decoder.target_vocab_size", WPM_VOCAB_SIZE)?;
        p.set("decoder.emb_dim", 256)?;
        p.set("decoder.beam_search.target_seq_len", 140)?;
        Ok(p)
    }

    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        vec![
            (TRAIN, wpm_train as DatasetFn),
            (DEV, wpm_dev as DatasetFn),
            (TEST, wpm_test as DatasetFn),
        ]
    }
}
