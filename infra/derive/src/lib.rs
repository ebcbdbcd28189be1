#![allow(unreachable_pub)]

//! # Derive
//!
//! Procedural macros for the parley workspace.
//!
//! Every library crate declares its failure modes with [`macro@parley_error`],
//! so errors across the registry, params tree, config loader and logger share
//! one shape: named fields, an optional human-readable context, and a
//! `Result<T>`-friendly `.context(..)` extension.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! parley-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a workspace error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext<T>` trait with `.context(..)` for `Result<T, Name>`, and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for variants that wrap a source error.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper usable in `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an enum with named-field variants only.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. A variant with a `source` field (or a field marked `#[source]`/`#[from]`)
///    must also have a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[parley_derive::parley_error]
/// pub enum LoaderError {
///     #[error("Read failed{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal loader error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoaderError> {
///     std::fs::read_to_string(path).context("Reading experiment overrides")
/// }
/// ```
#[proc_macro_attribute]
pub fn parley_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
