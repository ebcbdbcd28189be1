use parley_kernel::params::ParamsError;
use std::borrow::Cow;

/// Errors raised by [`Registry`](crate::Registry) operations.
#[parley_derive::parley_error]
pub enum RegistryError {
    /// The key is already taken. Registration is strict: nothing is overwritten.
    #[error("Duplicate registration{}: '{key}' is already registered", format_context(.context))]
    DuplicateRegistration { key: String, context: Option<Cow<'static, str>> },

    /// No entry under `key`. `suggestions` holds nearby registered keys.
    #[error(
        "Unknown configuration{}: '{key}'{}",
        format_context(.context),
        format_suggestions(.suggestions)
    )]
    NotFound { key: String, suggestions: Vec<String>, context: Option<Cow<'static, str>> },

    /// The key is empty or not a dotted path of `[A-Za-z0-9_]` segments.
    #[error("Invalid registry key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Registration attempted after [`Registry::freeze`](crate::Registry::freeze).
    #[error("Registry is frozen{}: cannot register '{key}'", format_context(.context))]
    Frozen { key: String, context: Option<Cow<'static, str>> },

    #[error(
        "Dataset not found{}: '{dataset}' for '{key}' (available: {})",
        format_context(.context),
        format_available(.available)
    )]
    DatasetNotFound {
        key: String,
        dataset: String,
        available: Vec<String>,
        context: Option<Cow<'static, str>>,
    },

    /// A factory failed while building its params.
    #[error("Params error{}: {source}", format_context(.context))]
    Params { source: ParamsError, context: Option<Cow<'static, str>> },
}

fn format_suggestions(suggestions: &[String]) -> Cow<'static, str> {
    if suggestions.is_empty() {
        Cow::Borrowed("")
    } else {
        Cow::Owned(format!("; did you mean: {}", suggestions.join(", ")))
    }
}

fn format_available(available: &[String]) -> Cow<'static, str> {
    if available.is_empty() { Cow::Borrowed("none") } else { Cow::Owned(available.join(", ")) }
}
