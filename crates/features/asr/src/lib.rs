//! Speech recognition slice: LibriSpeech and WSJ listen-attend-spell experiments.
mod error;
pub mod params;

pub use crate::error::{AsrError, AsrErrorExt};
use crate::params::librispeech::{Librispeech960Grapheme, Librispeech960Wpm};
use crate::params::wsj::WsjGrapheme;
use parley_registry::Registry;

/// Registers every ASR experiment.
///
/// # Errors
/// Fails on the first experiment the registry rejects, typically because the
/// slice was already registered or the registry is frozen.
pub fn register(registry: &Registry) -> Result<(), AsrError> {
    let keys = [
        registry.register_experiment::<Librispeech960Grapheme>().context("librispeech grapheme")?,
        registry.register_experiment::<Librispeech960Wpm>().context("librispeech wpm")?,
        registry.register_experiment::<WsjGrapheme>().context("wsj grapheme")?,
    ];

    tracing::info!(experiments = keys.len(), "ASR slice registered");
    Ok(())
}
