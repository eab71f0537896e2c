use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info,ecommerce_mappers=debug";

/// Install the global subscriber. `RUST_LOG` wins over [`DEFAULT_FILTER`].
///
/// Returns `false` when a subscriber was already installed, so calling it from
/// several tests is harmless.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
