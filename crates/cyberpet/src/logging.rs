//! Opt-in diagnostics.
//!
//! The library only emits `tracing` events. Hosts that don't run their own
//! subscriber can call [`init`] to get them on stderr, filtered by
//! `CYBERPET_LOG` (same syntax as `RUST_LOG`, e.g. `cyberpet=debug`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CYBERPET_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install a stderr fmt subscriber. Returns `false` when a global subscriber
/// is already set; the existing one is left alone.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let _ = init();
        assert!(!init());
    }
}
