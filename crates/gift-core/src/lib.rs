//! gift-core
//!
//! Session state and storefront services for Gift Galaxy.
//! Depends on gift-domain. No CLI, no terminal I/O, no persistence.

pub mod account_service;
pub mod catalog_service;
pub mod error;
pub mod list_service;
pub mod query_service;
pub mod reducer;
pub mod router;
pub mod session;

pub use account_service::*;
pub use catalog_service::*;
pub use error::CoreError;
pub use list_service::*;
pub use query_service::*;
pub use reducer::*;
pub use router::*;
pub use session::*;
