use std::sync::Arc;

/// A logger type which is called with various information about the sort run.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which writes messages to stderr.
pub fn create_stderr_logger() -> InfoLogger {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}
