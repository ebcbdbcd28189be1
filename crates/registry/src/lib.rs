//! Registry of experiment configurations.
//!
//! Each registered key names a factory that builds a fresh [`Params`] tree on
//! demand. Keys are dotted paths (`asr.wsj.WsjGrapheme`), either given explicitly
//! to [`Registry::register`] or derived from a type's module path through
//! [`Experiment`] and [`Registry::register_experiment`].
//!
//! Registration is strict: a second registration under the same key fails with
//! [`RegistryError::DuplicateRegistration`] and leaves the first one in place.
//!
//! [`Params`]: parley_kernel::params::Params
mod entry;
mod error;
mod experiment;
mod key;
mod registry;
mod suggest;

pub use entry::ConfigEntry;
pub use error::{RegistryError, RegistryErrorExt};
pub use experiment::{DatasetFn, Experiment};
pub use key::ConfigKey;
pub use registry::{KeyList, Keys, Registry};
