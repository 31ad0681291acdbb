use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Username `{0}` already exists!")]
    DuplicateUsername(String),
    #[error("Invalid username or password!")]
    InvalidCredentials,
    #[error("No user is signed in.")]
    NotLoggedIn,
}
