//! Log output for the `puid` binary.
//!
//! Events go to stderr so stdout carries only identifiers or JSON. The level
//! is taken from `RUST_LOG` and defaults to `warn`; `RUST_LOG=puid=debug`
//! shows prefix collisions during derivation.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .try_init()?;
    Ok(())
}
