pub mod build_info;

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Session, account and list events come from `gift_core`, so every crate in
/// the workspace is listed.
const DEFAULT_DIRECTIVE: &str = "gift_galaxy=info,gift_core=info,gift_config=info";

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVE)
}

/// Installs the global subscriber. Log lines go to stderr so shell output on
/// stdout stays clean; `RUST_LOG` replaces the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

        // Another subscriber may already be installed by an embedding binary.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    });
}
