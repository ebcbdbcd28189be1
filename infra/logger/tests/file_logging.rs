use parley_logger::{LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logger_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("parley-file")
        .console(false)
        .level(LevelFilter::INFO)
        .directory(&log_dir)
        .rotation(Rotation::NEVER)
        .json(true)
        .init()?;

    assert!(logger.guard().is_some());
    tracing::info!(key = "asr.librispeech.Librispeech960Grapheme", "materialized params");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("a log file should exist");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|l| l.contains("materialized params")).expect("log line");
    assert!(line.starts_with('{'), "file records should be JSON: {line}");
    assert!(line.contains("asr.librispeech.Librispeech960Grapheme"));

    Ok(())
}
