use parley_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let _first = Logger::builder()
        .name("parley-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("parley-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}

#[test]
fn disabled_outputs_are_rejected_before_install() {
    let err = Logger::builder()
        .name("parley-silent")
        .console(false)
        .init()
        .expect_err("no outputs should fail");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn unknown_level_is_rejected_before_install() {
    let err = Logger::builder()
        .name("parley-loud")
        .level_str("loud")
        .init()
        .expect_err("unknown level should fail");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("'loud'"));
}
