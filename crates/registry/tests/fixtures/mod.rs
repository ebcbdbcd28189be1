#![allow(dead_code)]

use parley_kernel::params::{Params, ParamsError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn librispeech() -> Result<Params, ParamsError> {
    Params::new().with("lr", 0.001, "Learning rate.")?.with("layers", 4, "Encoder layers.")
}

pub fn constant(tag: &'static str) -> impl Fn() -> Params + Send + Sync + 'static {
    move || {
        let mut p = Params::new();
        p.define("tag", tag, "Which factory built this.").expect("valid name");
        p
    }
}

/// Factory that counts its invocations.
pub fn counted(calls: Arc<AtomicUsize>) -> impl Fn() -> Params + Send + Sync + 'static {
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
        Params::new()
    }
}

pub mod params {
    pub mod toy {
        use parley_kernel::params::{Params, ParamsError};
        use parley_registry::{DatasetFn, Experiment};

        pub struct TinyAsr;

        fn train() -> Result<Params, ParamsError> {
            Params::new()
                .with("file_pattern", "toy/train-*", "Input shards.")?
                .with("batch_size", 8, "Utterances per batch.")
        }

        fn dev() -> Result<Params, ParamsError> {
            Params::new()
                .with("file_pattern", "toy/dev-*", "Input shards.")?
                .with("batch_size", 2, "Utterances per batch.")
        }

        impl Experiment for TinyAsr {
            fn model() -> Result<Params, ParamsError> {
                Params::new().with("num_layers", 2, "Encoder layers.")
            }

            fn datasets() -> Vec<(&'static str, DatasetFn)> {
                vec![("Train", train as DatasetFn), ("Dev", dev as DatasetFn)]
            }
        }

        /// Model with no datasets whose factory always fails.
        pub struct Broken;

        impl Experiment for Broken {
            fn model() -> Result<Params, ParamsError> {
                Params::new().with("Bad Name", 1, "")
            }
        }
    }
}
