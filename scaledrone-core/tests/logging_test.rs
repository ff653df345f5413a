// Logging initialization tests
// A single test: the global subscriber can only be installed once per process

use scaledrone_core::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use scaledrone_core::ScaledroneError;

#[test]
fn test_init_logging_once() {
    let config = LogConfig::builder()
        .format(LogFormat::Json)
        .level(LogLevel::Debug)
        .build();
    init_logging(config).expect("first initialization succeeds");

    tracing::info!(room = "lobby", "structured event");

    let again = init_logging(LogConfig::default());
    assert!(matches!(again, Err(ScaledroneError::Configuration { .. })));
}
