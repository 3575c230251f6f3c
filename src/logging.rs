//! Opt-in diagnostics.
//!
//! The library only emits `tracing` events. Hosts that want them printed
//! call [`init_tracing`], which reads `JSVEIL_LOG` (falling back to
//! `RUST_LOG`) with the usual filter syntax:
//!
//! ```bash
//! JSVEIL_LOG=jsveil=debug my-host-app
//! JSVEIL_LOG="jsveil::processor::rewriter=trace" my-host-app
//! ```

use tracing_subscriber::EnvFilter;

fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var("JSVEIL_LOG") {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

/// Install a stderr fmt subscriber. Does nothing when no filter variable
/// is set, or when a global subscriber is already installed.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn test_init_is_repeatable() {
        init_tracing();
        init_tracing();
        tracing::debug!("still alive");
    }
}
