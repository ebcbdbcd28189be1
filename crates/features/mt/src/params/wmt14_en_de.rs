//! WMT'14 English to German.
use super::base::{self, BASE, Split};
use parley_domain::constants::{DEV, TEST, TRAIN};
use parley_kernel::params::{Params, ParamsError};
use parley_registry::{DatasetFn, Experiment};

const VOCAB: &str = "wmt14/en_de/wpm-ende.voc";

fn train() -> Result<Params, ParamsError> {
    base::input(&Split {
        file_pattern: "wmt14/en_de/train.tfrecords-*",
        vocab: VOCAB,
        num_samples: 4_492_886,
        tokens_per_batch: 8192,
        shuffle: true,
    })
}

fn dev() -> Result<Params, ParamsError> {
    base::input(&Split {
        file_pattern: "wmt14/en_de/dev.tfrecords",
        vocab: VOCAB,
        num_samples: 3_000,
        tokens_per_batch: 4096,
        shuffle: false,
    })
}

fn test() -> Result<Params, ParamsError> {
    base::input(&Split {
        file_pattern: "wmt14/en_de/test.tfrecords",
        vocab: VOCAB,
        num_samples: 2_737,
        tokens_per_batch: 4096,
        shuffle: false,
    })
}

fn splits() -> Vec<(&'static str, DatasetFn)> {
    vec![(TRAIN, train as DatasetFn), (DEV, dev as DatasetFn), (TEST, test as DatasetFn)]
}

/// Transformer-base (6 layers, 512 wide).
#[derive(Debug)]
pub struct WmtEnDeTransformerBase;

impl Experiment for WmtEnDeTransformerBase {
    fn model() -> Result<Params, ParamsError> {
        base::transformer("wmt14_en_de_transformer_base", BASE, 2.0)
    }

    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        splits()
    }
}

/// RNMT+ on the same data.
#[derive(Debug)]
pub struct WmtEnDeRnmt;

impl Experiment for WmtEnDeRnmt {
    fn model() -> Result<Params, ParamsError> {
        base::rnmt("wmt14_en_de_rnmtplus")
    }

    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        splits()
    }
}
