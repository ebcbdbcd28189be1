use parley_registry::RegistryError;
use std::borrow::Cow;

#[parley_derive::parley_error]
pub enum MtError {
    #[error("MT registration failed{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },
}
