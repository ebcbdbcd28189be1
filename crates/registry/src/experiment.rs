use parley_kernel::params::{Params, ParamsError};

/// Builds the params of one dataset split.
pub type DatasetFn = fn() -> Result<Params, ParamsError>;

/// A model/experiment definition registered under its own type path.
///
/// Implementors are usually unit structs living under a `params` module:
///
/// ```rust
/// use parley_kernel::params::{Params, ParamsError};
/// use parley_registry::{DatasetFn, Experiment, Registry};
///
/// pub struct TinyLm;
///
/// fn train() -> Result<Params, ParamsError> {
///     Params::new().with("batch_size", 32, "Examples per step.")
/// }
///
/// impl Experiment for TinyLm {
///     fn model() -> Result<Params, ParamsError> {
///         Params::new().with("num_layers", 2, "Stacked layers.")
///     }
///
///     fn datasets() -> Vec<(&'static str, DatasetFn)> {
///         vec![("Train", train as DatasetFn)]
///     }
/// }
///
/// let registry = Registry::new();
/// let key = registry.register_experiment::<TinyLm>()?;
/// assert!(key.as_str().ends_with(".TinyLm"));
/// assert_eq!(registry.datasets(key.as_str())?, ["Train"]);
/// # Ok::<(), parley_registry::RegistryError>(())
/// ```
pub trait Experiment: 'static {
    /// Default model params.
    ///
    /// # Errors
    /// Propagates failures from building the params tree.
    fn model() -> Result<Params, ParamsError>;

    /// Named dataset splits, conventionally `Train`, `Dev` and `Test`.
    fn datasets() -> Vec<(&'static str, DatasetFn)> {
        Vec::new()
    }
}
