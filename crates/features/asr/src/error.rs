use parley_registry::RegistryError;
use std::borrow::Cow;

#[parley_derive::parley_error]
pub enum AsrError {
    #[error("ASR registration failed{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}
