use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a fmt subscriber filtered by `RUST_LOG`. `log` records are
/// forwarded through the subscriber's log bridge.
pub fn try_init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

/// Like [`try_init_logging`], but a subscriber that is already installed is kept.
pub fn init_logging() {
    let _ = try_init_logging();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        // A second install fails but must not panic.
        assert!(try_init_logging().is_err());
    }
}
