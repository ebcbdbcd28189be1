//! Names shared between the registry, the task slices and the CLI.

/// Crate-name prefix stripped from the first segment of a derived key.
pub const KEY_CRATE_PREFIX: &str = "parley_";
/// Module segment dropped from derived keys (`parley_asr::params::wsj::X` -> `asr.wsj.X`).
pub const PARAMS_SEGMENT: &str = "params";
/// Separator between key segments.
pub const KEY_SEPARATOR: char = '.';

/// Conventional dataset split names.
pub const TRAIN: &str = "Train";
pub const DEV: &str = "Dev";
pub const TEST: &str = "Test";

/// Name under which dataset params are attached to a model's params.
pub const INPUT_PARAM: &str = "input";

/// Environment variable prefix for configuration overrides (`PARLEY__LOG__LEVEL`).
pub const ENV_PREFIX: &str = "PARLEY";
/// Configuration file looked up when no explicit path is given (extension optional).
pub const DEFAULT_CONFIG_FILE: &str = "parley";
