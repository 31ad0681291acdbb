//! Cart and wishlist mutations. Both are plain ordered lists of gift copies.

use gift_domain::{Gift, GiftId};

use crate::catalog_service::CatalogService;

pub struct ListService;

impl ListService {
    /// Appends a copy of the catalog entry. Unknown ids leave `list` untouched
    /// and return `None`. Duplicates are allowed.
    pub fn add<'a>(list: &mut Vec<Gift>, catalog: &'a [Gift], id: GiftId) -> Option<&'a Gift> {
        let gift = CatalogService::find(catalog, id)?;
        list.push(gift.clone());
        Some(gift)
    }

    /// Drops every entry carrying `id`, not only the first, and returns how
    /// many were removed.
    pub fn remove(list: &mut Vec<Gift>, id: GiftId) -> usize {
        let before = list.len();
        list.retain(|gift| gift.id != id);
        before - list.len()
    }

    pub fn count(list: &[Gift], id: GiftId) -> usize {
        list.iter().filter(|gift| gift.id == id).count()
    }

    pub fn total(list: &[Gift]) -> u64 {
        list.iter().map(|gift| u64::from(gift.price)).sum()
    }
}
