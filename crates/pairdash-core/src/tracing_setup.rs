use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber.
///
/// While the TUI owns the terminal nothing may write to stderr, so log
/// output only goes anywhere when `PAIRDASH_LOG_FILE` names a file to
/// append to. `RUST_LOG` filters as usual, defaulting to info.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry();

    match std::env::var("PAIRDASH_LOG_FILE").ok() {
        Some(log_path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path);
            match file {
                Ok(file) => {
                    let file_layer = fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(true)
                        .with_filter(filter);
                    registry.with(file_layer).init();
                }
                Err(err) => {
                    eprintln!("could not open log file {log_path}: {err}");
                    registry.init();
                }
            }
        }
        None => {
            registry.init();
        }
    }
}
