use std::borrow::Cow;

#[parley_derive::parley_error]
pub enum ParleyError {
    #[cfg(feature = "asr")]
    #[error("ASR slice{}: {source}", format_context(.context))]
    Asr { source: parley_asr::AsrError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "mt")]
    #[error("MT slice{}: {source}", format_context(.context))]
    Mt { source: parley_mt::MtError, context: Option<Cow<'static, str>> },
}
