use serde::Deserialize;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the `parley` tool.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfigInner {
    pub log: LogConfig,
    /// Per-experiment param overrides, applied in file order.
    pub overrides: Vec<ExperimentOverride>,
}

/// A block of `path=literal` assignments for one registry key.
///
/// Literals are parsed the same way as `--set path=literal` on the command line.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExperimentOverride {
    pub key: String,
    pub set: Vec<String>,
}

/// Arc-wrapped config, cheap to clone into subcommands.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(flatten, default)]
    inner: Arc<ShellConfigInner>,
}

impl ShellConfig {
    /// All assignments configured for `key`, in file order.
    pub fn overrides_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner
            .overrides
            .iter()
            .filter(move |block| block.key == key)
            .flat_map(|block| block.set.iter().map(String::as_str))
    }
}

impl From<ShellConfigInner> for ShellConfig {
    fn from(inner: ShellConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for ShellConfig {
    type Target = ShellConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Explicit filter directives; overrides `RUST_LOG` when set.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub directory: Option<PathBuf>,
    /// Write file records as JSON lines.
    pub json: bool,
    /// Colourize console output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, directory: None, json: false, ansi: true }
    }
}
