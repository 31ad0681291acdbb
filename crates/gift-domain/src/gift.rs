//! Domain types representing catalog gifts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog identifier, unique within a generated catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct GiftId(pub u32);

impl GiftId {
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().trim_start_matches('#').parse().ok().map(GiftId)
    }
}

impl fmt::Display for GiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A purchasable gift. Prices are whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gift {
    pub id: GiftId,
    pub name: String,
    pub price: u32,
    pub category: Category,
    pub description: String,
}

impl Gift {
    pub fn new(
        id: GiftId,
        name: impl Into<String>,
        price: u32,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            description: description.into(),
        }
    }
}

/// Fixed gift categories, in catalog table order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Electronics,
    Books,
    Toys,
    #[serde(rename = "Home Decor")]
    HomeDecor,
    Fashion,
    Gourmet,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Books,
        Category::Toys,
        Category::HomeDecor,
        Category::Fashion,
        Category::Gourmet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::HomeDecor => "Home Decor",
            Category::Fashion => "Fashion",
            Category::Gourmet => "Gourmet",
        }
    }

    /// Case-insensitive; spaces, dashes and underscores are ignored so
    /// `home-decor` and `HomeDecor` both resolve.
    pub fn parse(value: &str) -> Option<Self> {
        let needle = normalize(value);
        Self::ALL
            .into_iter()
            .find(|category| normalize(category.label()) == needle)
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '_'))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_ignores_case_and_separators() {
        assert_eq!(Category::parse("books"), Some(Category::Books));
        assert_eq!(Category::parse("home decor"), Some(Category::HomeDecor));
        assert_eq!(Category::parse("Home-Decor"), Some(Category::HomeDecor));
        assert_eq!(Category::parse("homedecor"), Some(Category::HomeDecor));
        assert_eq!(Category::parse("garden"), None);
    }

    #[test]
    fn category_serializes_with_label() {
        let json = serde_json::to_string(&Category::HomeDecor).unwrap();
        assert_eq!(json, "\"Home Decor\"");
    }

    #[test]
    fn gift_id_parse_accepts_hash_prefix() {
        assert_eq!(GiftId::parse("#12"), Some(GiftId(12)));
        assert_eq!(GiftId::parse(" 7 "), Some(GiftId(7)));
        assert_eq!(GiftId::parse("seven"), None);
    }
}
