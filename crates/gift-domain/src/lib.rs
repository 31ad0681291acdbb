//! gift-domain
//!
//! Pure domain models (Gift, Category, User, Page, SortOrder).
//! No I/O, no CLI, no session state. Only data types and core enums.

pub mod common;
pub mod gift;
pub mod user;

pub use common::*;
pub use gift::*;
pub use user::*;
