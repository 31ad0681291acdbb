//! Action dispatch for the storefront session.
//!
//! Every user interaction is expressed as an [`Action`] and applied through
//! [`reduce`], which mutates the session and hands back a [`Notice`] for the
//! view to show. Rendering stays on the caller's side.

use std::collections::BTreeSet;
use std::fmt;

use gift_domain::{Category, GiftId, Page, SortOrder};

use crate::{AccountService, CoreError, ListService, Router, Session};

/// User events emitted by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        password: String,
        display_name: String,
    },
    Logout,
    Navigate(Page),
    AddToCart(GiftId),
    AddToWishlist(GiftId),
    RemoveFromCart(GiftId),
    RemoveFromWishlist(GiftId),
    UpdateSearch(String),
    UpdateSort(SortOrder),
    UpdateMaxPrice(u32),
    UpdateCategories(BTreeSet<Category>),
    SaveProfile {
        display_name: String,
        password: Option<String>,
    },
}

impl Action {
    /// Short name used in log records; never includes credentials.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Register { .. } => "register",
            Action::Logout => "logout",
            Action::Navigate(_) => "navigate",
            Action::AddToCart(_) => "add_to_cart",
            Action::AddToWishlist(_) => "add_to_wishlist",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::RemoveFromWishlist(_) => "remove_from_wishlist",
            Action::UpdateSearch(_) => "update_search",
            Action::UpdateSort(_) => "update_sort",
            Action::UpdateMaxPrice(_) => "update_max_price",
            Action::UpdateCategories(_) => "update_categories",
            Action::SaveProfile { .. } => "save_profile",
        }
    }
}

/// Transient outcome of an action, shown once and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoggedIn { display_name: String },
    Registered { username: String },
    LoggedOut,
    Navigated { from: Page, to: Page },
    AddedToCart { name: String },
    AddedToWishlist { name: String },
    RemovedFromCart { id: GiftId, removed: usize },
    RemovedFromWishlist { id: GiftId, removed: usize },
    FiltersUpdated,
    ProfileUpdated,
    Unchanged,
}

impl Notice {
    /// Whether the view should surface this notice as a success message.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Notice::Registered { .. }
                | Notice::AddedToCart { .. }
                | Notice::AddedToWishlist { .. }
                | Notice::ProfileUpdated
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoggedIn { display_name } => write!(f, "Welcome, {display_name}!"),
            Notice::Registered { .. } => f.write_str("Registration successful! Please log in."),
            Notice::LoggedOut => f.write_str("Logged out."),
            Notice::Navigated { to, .. } => write!(f, "Showing {to}."),
            Notice::AddedToCart { name } => write!(f, "{name} added to your cart!"),
            Notice::AddedToWishlist { name } => write!(f, "{name} added to your wishlist!"),
            Notice::RemovedFromCart { id, removed } => {
                write!(f, "Removed {removed} cart item(s) matching {id}.")
            }
            Notice::RemovedFromWishlist { id, removed } => {
                write!(f, "Removed {removed} wishlist item(s) matching {id}.")
            }
            Notice::FiltersUpdated => f.write_str("Listing updated."),
            Notice::ProfileUpdated => f.write_str("Profile updated successfully!"),
            Notice::Unchanged => f.write_str("Nothing changed."),
        }
    }
}

/// Applies `action` to `session`. Errors are recoverable and leave the session
/// as it was.
pub fn reduce(session: &mut Session, action: Action) -> Result<Notice, CoreError> {
    tracing::debug!(session = %session.id, action = action.kind(), "reducing action");

    match action {
        Action::Login { username, password } => {
            AccountService::login(session, &username, &password)?;
            let display_name = session.display_name().unwrap_or(&username).to_string();
            Ok(Notice::LoggedIn { display_name })
        }
        Action::Register {
            username,
            password,
            display_name,
        } => {
            AccountService::register(session, &username, &password, &display_name)?;
            Ok(Notice::Registered { username })
        }
        Action::Logout => {
            AccountService::logout(session);
            Ok(Notice::LoggedOut)
        }
        Action::Navigate(target) => {
            let from = Router::navigate(session, target);
            Ok(Notice::Navigated { from, to: target })
        }
        Action::AddToCart(id) => {
            let notice = ListService::add(&mut session.cart, &session.catalog, id)
                .map(|gift| Notice::AddedToCart {
                    name: gift.name.clone(),
                })
                .unwrap_or(Notice::Unchanged);
            tracing::info!(session = %session.id, gift = id.0, cart = session.cart.len(), "add to cart");
            Ok(notice)
        }
        Action::AddToWishlist(id) => {
            let notice = ListService::add(&mut session.wishlist, &session.catalog, id)
                .map(|gift| Notice::AddedToWishlist {
                    name: gift.name.clone(),
                })
                .unwrap_or(Notice::Unchanged);
            tracing::info!(session = %session.id, gift = id.0, wishlist = session.wishlist.len(), "add to wishlist");
            Ok(notice)
        }
        Action::RemoveFromCart(id) => {
            let removed = ListService::remove(&mut session.cart, id);
            tracing::info!(session = %session.id, gift = id.0, removed, "remove from cart");
            Ok(Notice::RemovedFromCart { id, removed })
        }
        Action::RemoveFromWishlist(id) => {
            let removed = ListService::remove(&mut session.wishlist, id);
            tracing::info!(session = %session.id, gift = id.0, removed, "remove from wishlist");
            Ok(Notice::RemovedFromWishlist { id, removed })
        }
        Action::UpdateSearch(text) => {
            session.search_query = text;
            Ok(filters_updated(session))
        }
        Action::UpdateSort(sort_by) => {
            session.sort_by = sort_by;
            Ok(filters_updated(session))
        }
        Action::UpdateMaxPrice(max_price) => {
            session.filter_price = max_price;
            Ok(filters_updated(session))
        }
        Action::UpdateCategories(categories) => {
            session.filter_category = categories;
            Ok(filters_updated(session))
        }
        Action::SaveProfile {
            display_name,
            password,
        } => {
            AccountService::update_profile(session, &display_name, password.as_deref())?;
            Ok(Notice::ProfileUpdated)
        }
    }
}

fn filters_updated(session: &Session) -> Notice {
    tracing::info!(
        session = %session.id,
        search = %session.search_query,
        sort = session.sort_by.token(),
        max_price = session.filter_price,
        categories = session.filter_category.len(),
        "listing filters updated"
    );
    Notice::FiltersUpdated
}
