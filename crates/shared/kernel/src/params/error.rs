use std::borrow::Cow;

/// Failures while defining, reading or updating a [`Params`](super::Params) tree.
#[parley_derive::parley_error]
pub enum ParamsError {
    /// `define` was called twice for the same name.
    #[error("Param already defined{}: {name}", format_context(.context))]
    AlreadyDefined { name: String, context: Option<Cow<'static, str>> },

    /// The dotted path does not lead to a defined param.
    #[error("Param undefined{}: {path}", format_context(.context))]
    Undefined { path: String, context: Option<Cow<'static, str>> },

    /// An intermediate path segment holds a plain value instead of nested params.
    #[error("Param is not nested{}: {path}", format_context(.context))]
    NotNested { path: String, context: Option<Cow<'static, str>> },

    /// Names must match `[a-z][a-z0-9_]*`.
    #[error(
        "Invalid param name{}: '{name}' (expected lowercase ascii, digits and '_')",
        format_context(.context)
    )]
    InvalidName { name: String, context: Option<Cow<'static, str>> },

    /// An override was not written as `path=literal`.
    #[error("Malformed assignment{}: '{text}'", format_context(.context))]
    Assignment { text: String, context: Option<Cow<'static, str>> },
}
