use crate::error::RegistryError;
use crate::experiment::Experiment;
use crate::key::ConfigKey;
use parley_kernel::params::{IntoParams, Params, ParamsError};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Builds a fresh params tree on every call.
pub(crate) type Factory = Arc<dyn Fn() -> Result<Params, ParamsError> + Send + Sync>;

pub(crate) fn boxed<F, R>(factory: F) -> Factory
where
    F: Fn() -> R + Send + Sync + 'static,
    R: IntoParams,
{
    Arc::new(move || factory().into_params())
}

/// One registered configuration: a model factory plus named dataset factories.
#[derive(Clone)]
pub struct ConfigEntry {
    key: ConfigKey,
    model: Factory,
    datasets: BTreeMap<String, Factory>,
}

impl ConfigEntry {
    pub fn new<F, R>(key: ConfigKey, factory: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoParams,
    {
        Self { key, model: boxed(factory), datasets: BTreeMap::new() }
    }

    /// Adds a dataset factory. A later call with the same name replaces the earlier one.
    #[must_use]
    pub fn with_dataset<F, R>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoParams,
    {
        self.datasets.insert(name.into(), boxed(factory));
        self
    }

    /// Entry for an [`Experiment`], keyed by the experiment's type path.
    ///
    /// # Errors
    /// [`RegistryError::InvalidKey`] when the type path does not map to a key.
    pub fn from_experiment<E: Experiment>() -> Result<Self, RegistryError> {
        let entry = E::datasets()
            .into_iter()
            .fold(Self::new(ConfigKey::of::<E>()?, E::model), |entry, (name, factory)| {
                entry.with_dataset(name, factory)
            });
        Ok(entry)
    }

    #[must_use]
    pub const fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Dataset names in sorted order.
    pub fn datasets(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn has_dataset(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    /// Runs the model factory.
    ///
    /// # Errors
    /// Whatever the factory returns.
    pub fn instantiate(&self) -> Result<Params, ParamsError> {
        (self.model)()
    }

    /// Runs the dataset factory, `None` if no dataset has that name.
    pub fn instantiate_dataset(&self, name: &str) -> Option<Result<Params, ParamsError>> {
        self.datasets.get(name).map(|factory| factory())
    }
}

impl fmt::Debug for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigEntry")
            .field("key", &self.key)
            .field("datasets", &self.datasets.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
