use crate::error::{HelloError, HelloResult};
pub use tracing::debug;
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/* 📖 # Why do logs go to stderr?
Standard output carries the greeting and nothing else.
Diagnostics are written to stderr so piping the output stays clean.
*/

pub fn init_tracing() -> HelloResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| {
            Box::new(HelloError::message(format!(
                "Failed to initialize tracing: {}",
                e
            )))
        })
}
