//! Facade crate for the Parley task slices and shared modules.
//! Re-exports the registry, domain and kernel crates and runs slice registration.
//! Keep this crate thin: it composes other crates, it does not define experiments.
//!
//! ## Usage
//! - Add `parley` with the desired slice features (`asr`, `mt`; both by default).
//! - Call [`registry`] for a populated, frozen registry, or [`init`] to populate
//!   one you built yourself.
mod error;

pub use crate::error::{ParleyError, ParleyErrorExt};
pub use parley_domain as domain;
pub use parley_kernel as kernel;
pub use parley_registry as registry;

use parley_registry::Registry;

/// Slice registry for runtime introspection.
pub mod features {
    #[cfg(feature = "asr")]
    pub use parley_asr as asr;
    #[cfg(feature = "mt")]
    pub use parley_mt as mt;

    /// Build-time enabled slices (by Cargo feature), in registration order.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "asr")]
        "asr",
        #[cfg(feature = "mt")]
        "mt",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registers every enabled slice into `registry`, ASR first, then MT.
///
/// # Errors
/// Returns the first slice registration failure.
pub fn init(registry: &Registry) -> Result<(), ParleyError> {
    #[cfg(feature = "asr")]
    features::asr::register(registry)?;

    #[cfg(feature = "mt")]
    features::mt::register(registry)?;

    tracing::debug!(slices = ?features::ENABLED, entries = registry.len(), "Slices initialized");
    Ok(())
}

/// Builds a registry holding every enabled slice and freezes it.
///
/// # Errors
/// See [`init`].
pub fn registry() -> Result<Registry, ParleyError> {
    let registry = Registry::new();
    init(&registry)?;
    registry.freeze();
    Ok(registry)
}
