//! Wall Street Journal (si284) experiments.
use super::common::{self, EncoderShape, Split};
use parley_domain::constants::{DEV, TEST, TRAIN};
use parley_kernel::params::{Params, ParamsError};
use parley_registry::{DatasetFn, Experiment};

fn train() -> Result<Params, ParamsError> {
    let mut p = common::input(Split {
        file_pattern: "wsj/train_si284/*.tfrecords",
        num_samples: 37_318,
        bucket_batch_limit: common::train_batches(),
        shuffle: true,
    })?;
    p.set("target_max_length", 300)?;
    Ok(p)
}

fn dev() -> Result<Params, ParamsError> {
    common::input(Split {
        file_pattern: "wsj/dev93/*.tfrecords",
        num_samples: 503,
        bucket_batch_limit: common::eval_batches(),
        shuffle: false,
    })
}

fn test() -> Result<Params, ParamsError> {
    common::input(Split {
        file_pattern: "wsj/eval92/*.tfrecords",
        num_samples: 333,
        bucket_batch_limit: common::eval_batches(),
        shuffle: false,
    })
}

/// Smaller grapheme model sized for the 81h WSJ corpus.
#[derive(Debug)]
pub struct WsjGrapheme;

impl Experiment for WsjGrapheme {
    fn model() -> Result<Params, ParamsError> {
        let shape = EncoderShape { num_lstm_layers: 3, lstm_cell_size: 256 };
        let mut encoder = common::encoder(&shape)?;
        encoder.set("dropout_prob", 0.2)?;

        let mut decoder = common::decoder(2 * shape.lstm_cell_size, 256)?;
        decoder.set("rnn_layers", 1)?;

        common::model("wsj", encoder, decoder, common::learner(1e-3, 120_000)?)
    }

    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        vec![(TRAIN, train as DatasetFn), (DEV, dev as DatasetFn), (TEST, test as DatasetFn)]
    }
}
