#![doc(test(attr(deny(warnings))))]

//! Gift Galaxy is a terminal storefront: browse a generated gift catalog,
//! filter and sort it, and keep a cart and wishlist behind a session-local
//! account. State lives in `gift-core`; this crate is the interactive shell.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gift Galaxy tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
