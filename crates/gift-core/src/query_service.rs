//! Search, filter, and sort pipeline for the catalog listing.

use std::collections::BTreeSet;

use gift_domain::{Category, Gift, SortOrder};

/// Listing criteria. An empty `search` or `categories` matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub max_price: u32,
    pub categories: BTreeSet<Category>,
    pub sort_by: SortOrder,
}

impl CatalogQuery {
    /// Everything priced up to `max_price`, sorted by name.
    pub fn new(max_price: u32) -> Self {
        Self {
            search: String::new(),
            max_price,
            categories: BTreeSet::new(),
            sort_by: SortOrder::Name,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn sorted_by(mut self, sort_by: SortOrder) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// True when no criterion narrows the catalog below `price_ceiling`.
    pub fn is_unfiltered(&self, price_ceiling: u32) -> bool {
        self.search.is_empty() && self.categories.is_empty() && self.max_price >= price_ceiling
    }

    pub fn matches(&self, gift: &Gift) -> bool {
        self.matches_search(gift) && gift.price <= self.max_price && self.matches_category(gift)
    }

    fn matches_search(&self, gift: &Gift) -> bool {
        if self.search.is_empty() {
            return true;
        }
        gift.name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    fn matches_category(&self, gift: &Gift) -> bool {
        self.categories.is_empty() || self.categories.contains(&gift.category)
    }
}

pub struct QueryService;

impl QueryService {
    /// Filters then sorts. The sort is stable, so equal keys keep catalog order.
    pub fn run(catalog: &[Gift], query: &CatalogQuery) -> Vec<Gift> {
        let mut gifts: Vec<Gift> = catalog
            .iter()
            .filter(|gift| query.matches(gift))
            .cloned()
            .collect();

        match query.sort_by {
            SortOrder::Name => gifts.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::PriceAsc => gifts.sort_by_key(|gift| gift.price),
            SortOrder::PriceDesc => gifts.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        gifts
    }
}

/// Shorthand for [`QueryService::run`].
pub fn query(catalog: &[Gift], query: &CatalogQuery) -> Vec<Gift> {
    QueryService::run(catalog, query)
}
