//! Mutable state for one interactive storefront session.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use gift_domain::{Category, Gift, Page, SortOrder, User};
use uuid::Uuid;

use crate::catalog_service::CatalogService;
use crate::query_service::{CatalogQuery, QueryService};

/// Default ceiling of the maximum-price filter, in rupees.
pub const DEFAULT_MAX_PRICE: u32 = 3000;

/// Tags log records emitted on behalf of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut short = self.0.simple().to_string();
        short.truncate(8);
        f.write_str(&short)
    }
}

/// Everything a single user's visit can change. Discarded when the shell exits.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub page: Page,
    pub users: HashMap<String, User>,
    pub logged_in_user: Option<String>,
    pub cart: Vec<Gift>,
    pub wishlist: Vec<Gift>,
    pub catalog: Vec<Gift>,
    pub search_query: String,
    pub sort_by: SortOrder,
    pub filter_price: u32,
    pub filter_category: BTreeSet<Category>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_preferences(SortOrder::default(), DEFAULT_MAX_PRICE)
    }

    /// Starts a session whose listing begins with the given sort and price ceiling.
    pub fn with_preferences(sort_by: SortOrder, filter_price: u32) -> Self {
        let session = Self {
            id: SessionId::new(),
            page: Page::Login,
            users: HashMap::new(),
            logged_in_user: None,
            cart: Vec::new(),
            wishlist: Vec::new(),
            catalog: CatalogService::generate(),
            search_query: String::new(),
            sort_by,
            filter_price,
            filter_category: BTreeSet::new(),
        };
        tracing::info!(session = %session.id, gifts = session.catalog.len(), "session started");
        session
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in_user.is_some()
    }

    /// The signed-in user's record, if the name still keys into the directory.
    pub fn current_user(&self) -> Option<&User> {
        self.logged_in_user
            .as_deref()
            .and_then(|username| self.users.get(username))
    }

    pub fn display_name(&self) -> Option<&str> {
        self.current_user().map(|user| user.display_name.as_str())
    }

    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search_query.clone(),
            max_price: self.filter_price,
            categories: self.filter_category.clone(),
            sort_by: self.sort_by,
        }
    }

    /// The catalog as the home page lists it under the current filters.
    pub fn visible_gifts(&self) -> Vec<Gift> {
        QueryService::run(&self.catalog, &self.catalog_query())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
