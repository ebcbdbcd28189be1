//! Kernel utilities shared by the registry, the task slices and the CLI.
//! Keep this crate lightweight: the params tree and configuration loading only.
//!
//! ## Params
//! ```rust
//! use parley_kernel::params::Params;
//!
//! let p = Params::new().with("num_layers", 4, "Stacked layers.")?;
//! assert_eq!(p.to_text(), "num_layers : 4\n");
//! # Ok::<(), parley_kernel::params::ParamsError>(())
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use parley_kernel::config::load_config;
//!
//! let cfg: parley_domain::config::ShellConfig = load_config(None).unwrap();
//! ```
pub mod config;
pub mod params;

pub use parley_domain as domain;
