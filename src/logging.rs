//! Logging setup.
//!
//! Logs go to stderr so stdout stays free for rendered pages.

use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to "info" if `RUST_LOG` is not set. ANSI colors are only used
/// when stderr is a terminal. Calling this more than once is a no-op.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let ansi = std::io::stderr().is_terminal();

    let _ = subscriber(env_filter, std::io::stderr, ansi).try_init();
}

/// Build the fmt subscriber writing to `make_writer`.
pub fn subscriber<W>(
    env_filter: EnvFilter,
    make_writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(make_writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .with(env_filter)
}
