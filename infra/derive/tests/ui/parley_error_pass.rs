use parley_derive::parley_error;
use std::borrow::Cow;

#[parley_error]
pub enum LookupError {
    #[error("Lookup failed{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },

    #[error("Parse failed{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, LookupError> {
    raw.parse::<i64>().context("Parsing layer count")
}

fn missing() -> Result<(), LookupError> {
    Err::<(), _>(LookupError::Missing { key: "asr.Base".to_owned(), context: None })
        .context("Resolving experiment")
}

fn main() {
    assert!(parse("4").is_ok());
    let err = parse("four").unwrap_err();
    assert!(err.to_string().contains("(Parsing layer count)"));

    let err = missing().unwrap_err();
    assert_eq!(err.to_string(), "Lookup failed (Resolving experiment): asr.Base");

    let err: LookupError = "broken invariant".into();
    assert!(matches!(err, LookupError::Internal { .. }));
}
