// Copyright 2025 the Golddust Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing subscriber setup for hosts that want the viewer's logs.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Config;

/// Installs a global `tracing` subscriber writing formatted events.
///
/// The filter comes from `RUST_LOG` when set, else from
/// [`Config::trace_level`], else `"info"`. Only the first call in a process
/// takes effect; later calls are ignored.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = Config {
            trace_level: Some("golddust=debug".into()),
            ..Config::default()
        };
        init_tracing(&config);
        init_tracing(&Config::default());
        tracing::debug!("still logging");
    }
}
