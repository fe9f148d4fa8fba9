//! Logging system demonstration
//!
//! This example shows how to use the logging infrastructure in different modes.
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run --example logging_demo
//!
//! # JSON format
//! cargo run --example logging_demo -- json
//!
//! # Compact format
//! cargo run --example logging_demo -- compact
//!
//! # With custom filter
//! cargo run --example logging_demo -- pretty "core_runtime=trace"
//! ```

use core_runtime::logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
use std::env;
use tracing::{debug, error, info, instrument, span, trace, warn, Level};

fn main() {
    let args: Vec<String> = env::args().collect();

    let format = if args.len() > 1 {
        match args[1].as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    } else {
        LogFormat::default()
    };

    let filter = args.get(2).cloned();

    let mut config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Trace)
        .with_spans(true)
        .with_target(true);

    if let Some(f) = filter {
        config = config.with_filter(f);
    }

    init_logging(config).expect("Failed to initialize logging");

    info!("=== Logging System Demo ===");
    info!(format = ?format, "Logging initialized");

    demo_log_levels();
    demo_structured_logging();
    demo_spans();
    demo_instrumentation();

    info!("=== Demo Complete ===");
}

fn demo_log_levels() {
    let span = span!(Level::INFO, "log_levels");
    let _enter = span.enter();

    trace!("This is a TRACE level log");
    debug!("This is a DEBUG level log");
    info!("This is an INFO level log");
    warn!("This is a WARN level log");
    error!("This is an ERROR level log");
}

fn demo_structured_logging() {
    let span = span!(Level::INFO, "structured_logging");
    let _enter = span.enter();

    info!("Simple message without fields");

    info!(
        song_id = 12345,
        title = "Song Title",
        duration_ms = 245000,
        "Song information"
    );

    info!(
        cached_songs = 42,
        search_results = 7,
        "Session state snapshot"
    );
}

fn demo_spans() {
    let span = span!(Level::INFO, "search_operation", query = "Foo\nBar");
    let _enter = span.enter();

    info!("Starting lyrics search");

    {
        let inner_span = span!(Level::DEBUG, "provider_search");
        let _inner = inner_span.enter();

        debug!(count = 12, "Received search results");
    }

    {
        let inner_span = span!(Level::DEBUG, "fetch_lyrics");
        let _inner = inner_span.enter();

        debug!(song_id = 12345, "Fetched lyrics for top result");
    }

    info!(song_id = 12345, "Search operation completed");
}

#[instrument]
fn demo_instrumentation() {
    info!("Instrumented function automatically creates spans");

    let titles = ["Foo", "Baz", "Qux"];
    process_titles(&titles);
}

#[instrument(fields(count = titles.len()))]
fn process_titles(titles: &[&str]) {
    debug!("Processing titles");

    for (idx, title) in titles.iter().enumerate() {
        trace!(index = idx, title = %title, "Processing individual title");
    }

    info!("All titles processed");
}
