use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "fintrack_core=info";

/// Initializes the global tracing subscriber. `RUST_LOG` wins over `directive`,
/// which in turn replaces the crate default.
pub fn init_tracing(directive: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive.unwrap_or(DEFAULT_DIRECTIVE)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}
