use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Logs go to stderr so that stdout only ever
/// carries the generated document.
pub fn init(color: bool, json: bool, levels: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(levels));

    let result = if json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .flatten_event(true)
            .try_init()
    } else {
        fmt()
            .with_ansi(color)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    // Ignore errors when setting, since tests can initialize this
    // multiple times.
    let _ = result;
}
