use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

/// Initialize tracing with an extra layer stacked under the stdout formatter.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - Writes to stdout to improve visibility in environments that hide stderr
///
/// `format` is `"json"` for structured output, anything else gives the compact formatter.
/// The `RUST_LOG` filter applies to the extra layer as well.
pub fn init_logging_with<L>(format: &str, extra: L)
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(extra).with(env_filter);
    let _ = if format == "json" {
        registry
            .with(fmt::layer().with_target(false).json().with_writer(io::stdout))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).compact().with_writer(io::stdout))
            .try_init()
    };
}
