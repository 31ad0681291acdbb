//! Deterministic catalog generation and lookups.

use gift_domain::{Category, Gift, GiftId};

/// Number of gifts in a generated catalog.
pub const CATALOG_SIZE: u32 = 30;

const BASE_PRICE: u32 = 500;
const PRICE_INCREMENT: u32 = 50;

/// Blurbs indexed like [`Category::ALL`].
const DESCRIPTIONS: [&str; 6] = [
    "This gadget will revolutionize your life. Or at least make it more fun!",
    "A page-turner that will keep you hooked until the last word.",
    "Perfect for kids—or adults who are kids at heart!",
    "Add a touch of elegance to any room with this masterpiece.",
    "Step out in style with this trendy must-have accessory.",
    "For the foodies who deserve the finest flavors in life.",
];

/// Builds and queries the fixed gift catalog.
pub struct CatalogService;

impl CatalogService {
    /// Generates the 30-item catalog. Pure: every call yields the same list.
    pub fn generate() -> Vec<Gift> {
        (1..=CATALOG_SIZE)
            .map(|index| {
                let slot = index as usize % Category::ALL.len();
                let category = Category::ALL[slot];
                Gift::new(
                    GiftId(index),
                    format!("Gift {index} ({category})"),
                    BASE_PRICE + PRICE_INCREMENT * index,
                    category,
                    DESCRIPTIONS[slot],
                )
            })
            .collect()
    }

    pub fn find(catalog: &[Gift], id: GiftId) -> Option<&Gift> {
        catalog.iter().find(|gift| gift.id == id)
    }

    /// Distinct categories present in `catalog`, in order of first appearance.
    pub fn categories(catalog: &[Gift]) -> Vec<Category> {
        let mut seen = Vec::new();
        for gift in catalog {
            if !seen.contains(&gift.category) {
                seen.push(gift.category);
            }
        }
        seen
    }
}

/// Shorthand for [`CatalogService::generate`].
pub fn generate_gifts() -> Vec<Gift> {
    CatalogService::generate()
}
