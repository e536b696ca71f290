//! Logging setup based on `tracing-subscriber`.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,folio_grid=debug";

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG` when present, falling back to [`DEFAULT_FILTER`].
/// Calling this more than once is harmless.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Install the global fmt subscriber with an explicit filter directive.
pub fn init_with_filter(directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directives))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_with_filter("trace");
        init();
        tracing::debug!("logging initialised twice without panicking");
    }
}
