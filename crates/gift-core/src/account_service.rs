use gift_domain::{Page, User};

use crate::{CoreError, Session};

/// Registration, sign-in, and profile edits over the session's user directory.
pub struct AccountService;

impl AccountService {
    /// Adds a user. Does not sign them in or leave the register page.
    pub fn register(
        session: &mut Session,
        username: &str,
        password: &str,
        display_name: &str,
    ) -> Result<(), CoreError> {
        if session.users.contains_key(username) {
            tracing::warn!(session = %session.id, username, "registration rejected: duplicate username");
            return Err(CoreError::DuplicateUsername(username.to_string()));
        }
        session.users.insert(
            username.to_string(),
            User::new(username, password, display_name),
        );
        tracing::info!(session = %session.id, username, "user registered");
        Ok(())
    }

    pub fn login(session: &mut Session, username: &str, password: &str) -> Result<(), CoreError> {
        let valid = session
            .users
            .get(username)
            .is_some_and(|user| user.password_matches(password));
        if !valid {
            tracing::warn!(session = %session.id, username, "login failed");
            return Err(CoreError::InvalidCredentials);
        }
        session.logged_in_user = Some(username.to_string());
        session.page = Page::Home;
        tracing::info!(session = %session.id, username, "user logged in");
        Ok(())
    }

    /// Cart and wishlist belong to the session, so they survive a logout.
    pub fn logout(session: &mut Session) {
        if let Some(username) = session.logged_in_user.take() {
            tracing::info!(session = %session.id, username = %username, "user logged out");
        }
        session.page = Page::Login;
    }

    /// Sets the display name; replaces the password only when `new_password`
    /// is non-empty.
    pub fn update_profile(
        session: &mut Session,
        new_display_name: &str,
        new_password: Option<&str>,
    ) -> Result<(), CoreError> {
        let username = session
            .logged_in_user
            .clone()
            .ok_or(CoreError::NotLoggedIn)?;
        let user = session
            .users
            .get_mut(&username)
            .ok_or(CoreError::NotLoggedIn)?;

        user.display_name = new_display_name.to_string();
        let password_changed = match new_password {
            Some(password) if !password.is_empty() => {
                user.password = password.to_string();
                true
            }
            _ => false,
        };
        tracing::info!(
            session = %session.id,
            username = %username,
            password_changed,
            "profile updated"
        );
        Ok(())
    }
}
