use crate::entry::ConfigEntry;
use crate::error::{RegistryError, RegistryErrorExt};
use crate::experiment::Experiment;
use crate::key::ConfigKey;
use crate::suggest::suggest;
use parking_lot::RwLock;
use parley_domain::constants::INPUT_PARAM;
use parley_kernel::params::{IntoParams, Params};
use std::collections::BTreeMap;
use std::collections::btree_map::Range;
use std::ops::Bound;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

type Entries = BTreeMap<ConfigKey, Arc<ConfigEntry>>;

#[derive(Debug, Default)]
struct RegistryState {
    /// Replaced copy-on-write so readers can hold a snapshot without the lock.
    entries: Arc<Entries>,
    frozen: bool,
}

/// Thread-safe map from [`ConfigKey`] to params factories.
///
/// Clones share the same underlying table. Registration takes a short write
/// lock; lookups and listings take a read lock only long enough to clone an
/// `Arc`, and factories always run outside the lock.
///
/// # Examples
/// ```rust
/// use parley_kernel::params::Params;
/// use parley_registry::Registry;
///
/// let registry = Registry::new();
/// registry.register("librispeech.Params", || {
///     Params::new()
///         .with("lr", 0.001, "Learning rate.")?
///         .with("layers", 4, "Encoder layers.")
/// })?;
///
/// let params = registry.get("librispeech.Params")?;
/// assert_eq!(params.get("layers")?.as_i64(), Some(4));
/// assert!(registry.get("librispeech.Missing").is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    state: Arc<RwLock<RegistryState>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `key`.
    ///
    /// # Errors
    /// [`RegistryError::InvalidKey`] for malformed keys,
    /// [`RegistryError::DuplicateRegistration`] if `key` is taken (the existing
    /// entry is kept), [`RegistryError::Frozen`] after [`Registry::freeze`].
    pub fn register<F, R>(&self, key: &str, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoParams,
    {
        let key = ConfigKey::parse(key).inspect_err(|err| warn!(%err, "Rejected registry key"))?;
        self.register_entry(ConfigEntry::new(key, factory))
    }

    /// Registers a fully built entry, dataset factories included.
    ///
    /// # Errors
    /// Same as [`Registry::register`], minus key validation.
    pub fn register_entry(&self, entry: ConfigEntry) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        let key = entry.key().clone();

        if state.frozen {
            warn!(key = %key, "Registration after freeze rejected");
            return Err(RegistryError::Frozen { key: key.to_string(), context: None });
        }
        if state.entries.contains_key(key.as_str()) {
            warn!(key = %key, "Duplicate registration rejected");
            return Err(RegistryError::DuplicateRegistration {
                key: key.to_string(),
                context: None,
            });
        }

        let datasets = entry.datasets().count();
        Arc::make_mut(&mut state.entries).insert(key.clone(), Arc::new(entry));
        debug!(key = %key, datasets, "Configuration registered");
        Ok(())
    }

    /// Registers `E` under the key derived from its type path and returns that key.
    ///
    /// # Errors
    /// Same as [`Registry::register`].
    pub fn register_experiment<E: Experiment>(&self) -> Result<ConfigKey, RegistryError> {
        let entry = ConfigEntry::from_experiment::<E>()?;
        let key = entry.key().clone();
        self.register_entry(entry)?;
        Ok(key)
    }

    /// Builds a fresh params tree for `key`.
    ///
    /// Every call runs the factory again, so callers may mutate the result freely.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] (with suggestions) for unknown keys,
    /// [`RegistryError::Params`] if the factory fails.
    pub fn get(&self, key: &str) -> Result<Params, RegistryError> {
        let entry = self.entry(key)?;
        trace!(key, "Instantiating params");
        entry.instantiate().context(format!("building '{key}'"))
    }

    /// Builds the params for `key` with the `dataset` params attached under `input`.
    ///
    /// # Errors
    /// As for [`Registry::get`], plus [`RegistryError::DatasetNotFound`].
    pub fn get_for_dataset(&self, key: &str, dataset: &str) -> Result<Params, RegistryError> {
        let entry = self.entry(key)?;
        let Some(input) = entry.instantiate_dataset(dataset) else {
            return Err(RegistryError::DatasetNotFound {
                key: key.to_owned(),
                dataset: dataset.to_owned(),
                available: entry.datasets().map(str::to_owned).collect(),
                context: None,
            });
        };

        trace!(key, dataset, "Instantiating params for dataset");
        let input = input.context(format!("building dataset '{dataset}' of '{key}'"))?;
        let mut params = entry.instantiate().context(format!("building '{key}'"))?;
        params.define_or_set(INPUT_PARAM, input).context(format!("attaching '{dataset}'"))?;
        Ok(params)
    }

    /// Dataset names registered for `key`, sorted.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] for unknown keys.
    pub fn datasets(&self, key: &str) -> Result<Vec<String>, RegistryError> {
        Ok(self.entry(key)?.datasets().map(str::to_owned).collect())
    }

    /// Snapshot of the keys starting with `prefix` (all keys for `None`), sorted.
    ///
    /// The snapshot is taken now; later registrations do not show up in it.
    #[must_use]
    pub fn list_keys(&self, prefix: Option<&str>) -> KeyList {
        KeyList { entries: self.snapshot(), prefix: prefix.unwrap_or_default().to_owned() }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.state.read().entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rejects all further registrations. Lookups are unaffected.
    pub fn freeze(&self) {
        let mut state = self.state.write();
        if !state.frozen {
            state.frozen = true;
            info!(entries = state.entries.len(), "Registry frozen");
        }
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.state.read().frozen
    }

    fn snapshot(&self) -> Arc<Entries> {
        Arc::clone(&self.state.read().entries)
    }

    fn entry(&self, key: &str) -> Result<Arc<ConfigEntry>, RegistryError> {
        let entries = self.snapshot();
        if let Some(entry) = entries.get(key) {
            return Ok(Arc::clone(entry));
        }

        let suggestions = suggest(key, entries.keys());
        debug!(key, suggestions = suggestions.len(), "Unknown configuration requested");
        Err(RegistryError::NotFound { key: key.to_owned(), suggestions, context: None })
    }
}

/// Sorted key listing over a registry snapshot.
///
/// Iterate it as often as needed with [`KeyList::iter`] or `for key in &list`.
#[derive(Debug, Clone)]
pub struct KeyList {
    entries: Arc<Entries>,
    prefix: String,
}

impl KeyList {
    pub fn iter(&self) -> Keys<'_> {
        let start: Bound<&str> = Bound::Included(self.prefix.as_str());
        Keys { range: self.entries.range::<str, _>((start, Bound::Unbounded)), prefix: &self.prefix }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a KeyList {
    type Item = &'a str;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`KeyList::iter`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    range: Range<'a, ConfigKey, Arc<ConfigEntry>>,
    prefix: &'a str,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        // Keys sharing a prefix are contiguous in sorted order.
        let (key, _) = self.range.next()?;
        key.as_str().starts_with(self.prefix).then_some(key.as_str())
    }
}
