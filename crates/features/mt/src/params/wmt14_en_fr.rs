//! WMT'14 English to French.
use super::base::{self, BIG, Split};
use parley_domain::constants::{DEV, TEST, TRAIN};
use parley_kernel::params::{Params, ParamsError};
use parley_registry::{DatasetFn, Experiment};

const VOCAB: &str = "wmt14/en_fr/wpm-enfr.voc";

fn split(file_pattern: &str, num_samples: i64, shuffle: bool) -> Result<Params, ParamsError> {
    base::input(&Split {
        file_pattern,
        vocab: VOCAB,
        num_samples,
        tokens_per_batch: if shuffle { 16_384 } else { 4096 },
        shuffle,
    })
}

fn train() -> Result<Params, ParamsError> {
    split("wmt14/en_fr/train.tfrecords-*", 35_762_532, true)
}

fn dev() -> Result<Params, ParamsError> {
    split("wmt14/en_fr/dev.tfrecords", 3_000, false)
}

fn test() -> Result<Params, ParamsError> {
    split("wmt14/en_fr/test.tfrecords", 3_003, false)
}

/// Transformer-big with a lower peak rate and heavier dropout.
#[derive(Debug)]
pub struct WmtEnFrTransformerBig;

impl Experiment for WmtEnFrTransformerBig {
    fn model() -> Result<Params, ParamsError> {
        let mut p = base::transformer("wmt14_en_fr_transformer_big", BIG, 1.0)?;
        p.set("encoder.residual_dropout_prob", 0.3)?;
        p.set("decoder.residual_dropout_prob", 0.3)?;
        Ok(p)
    }

    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        vec![(TRAIN, train as DatasetFn), (DEV, dev as DatasetFn), (TEST, test as DatasetFn)]
    }
}
