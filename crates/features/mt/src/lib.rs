//! Machine translation slice: WMT'14 Transformer and RNMT+ experiments.
mod error;
pub mod params;

pub use crate::error::{MtError, MtErrorExt};
use crate::params::wmt14_en_de::{WmtEnDeRnmt, WmtEnDeTransformerBase};
use crate::params::wmt14_en_fr::WmtEnFrTransformerBig;
use parley_registry::Registry;

/// Registers every MT experiment.
///
/// # Errors
/// Fails on the first experiment the registry rejects.
pub fn register(registry: &Registry) -> Result<(), MtError> {
    let keys = [
        registry.register_experiment::<WmtEnDeTransformerBase>().context("en-de transformer")?,
        registry.register_experiment::<WmtEnDeRnmt>().context("en-de rnmt")?,
        registry.register_experiment::<WmtEnFrTransformerBig>().context("en-fr transformer")?,
    ];

    tracing::info!(experiments = keys.len(), "MT slice registered");
    Ok(())
}
