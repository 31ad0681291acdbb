pub mod banner;
pub mod formatting;
pub mod views;
