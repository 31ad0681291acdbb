//! Navigation and ordering enums shared across the storefront.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six views a session can be showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Login,
    Register,
    Home,
    Cart,
    Wishlist,
    Profile,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::Register,
        Page::Home,
        Page::Cart,
        Page::Wishlist,
        Page::Profile,
    ];

    /// Pages reachable only from the navbar, which is shown to signed-in users.
    pub fn is_protected(self) -> bool {
        matches!(
            self,
            Page::Home | Page::Cart | Page::Wishlist | Page::Profile
        )
    }

    pub fn token(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::Home => "home",
            Page::Cart => "cart",
            Page::Wishlist => "wishlist",
            Page::Profile => "profile",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|page| page.token() == needle)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Home => "Home",
            Page::Cart => "Cart",
            Page::Wishlist => "Wishlist",
            Page::Profile => "Profile",
        };
        f.write_str(label)
    }
}

/// Orderings offered by the catalog listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Name,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Name, SortOrder::PriceAsc, SortOrder::PriceDesc];

    pub fn token(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    /// Accepts the short tokens as well as the listing labels.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Some(SortOrder::Name),
            "price-asc" | "price_asc" | "asc" | "price (low to high)" => Some(SortOrder::PriceAsc),
            "price-desc" | "price_desc" | "desc" | "price (high to low)" => {
                Some(SortOrder::PriceDesc)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOrder::Name => "Name",
            SortOrder::PriceAsc => "Price (Low to High)",
            SortOrder::PriceDesc => "Price (High to Low)",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_tokens_parse_back() {
        for page in Page::ALL {
            assert_eq!(Page::parse(page.token()), Some(page));
        }
        assert_eq!(Page::parse("  Wishlist "), Some(Page::Wishlist));
        assert_eq!(Page::parse("checkout"), None);
    }

    #[test]
    fn only_navbar_pages_are_protected() {
        assert!(!Page::Login.is_protected());
        assert!(!Page::Register.is_protected());
        assert!(Page::Profile.is_protected());
    }

    #[test]
    fn sort_order_accepts_labels() {
        assert_eq!(
            SortOrder::parse("Price (High to Low)"),
            Some(SortOrder::PriceDesc)
        );
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::PriceAsc));
        assert_eq!(SortOrder::parse("rating"), None);
    }

    #[test]
    fn sort_order_serializes_as_token() {
        let json = serde_json::to_string(&SortOrder::PriceAsc).unwrap();
        assert_eq!(json, "\"price-asc\"");
    }
}
