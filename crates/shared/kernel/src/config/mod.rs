use config::{Config, Environment, File};
use parley_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;

/// Errors raised while assembling tool configuration.
#[parley_derive::parley_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration into `T`.
///
/// Layers, lowest precedence first:
/// 1. `T`'s serde defaults.
/// 2. The file at `path` (required), or `parley.{toml,json,yaml,...}` in the
///    working directory when `path` is `None` (optional).
/// 3. Environment variables prefixed with `PARLEY__`, nested with `__`
///    (`PARLEY__LOG__LEVEL=debug` sets `log.level`).
///
/// Nothing is logged here; callers usually load config before a subscriber exists.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source
/// cannot be parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use parley_domain::config::ShellConfig;
/// use parley_kernel::config::load_config;
///
/// let cfg: ShellConfig = load_config(None).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
