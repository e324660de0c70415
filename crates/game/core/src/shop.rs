//! Shop catalog and commodity trading.

use crate::config::RollRange;
use crate::error::{GameError, GameResult, RecordKind};
use crate::rng::RandomSource;
use crate::state::ItemId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: ItemId,
    pub name: String,
    pub price: u32,
    pub description: String,
}

impl ShopItem {
    pub fn new(id: u32, name: impl Into<String>, price: u32, description: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// Ordered, read-only item catalog. Iteration follows catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ShopCatalog {
    items: Vec<ShopItem>,
}

impl ShopCatalog {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolve a purchase. Credits are handled by the caller.
    pub fn purchase(&self, id: ItemId) -> GameResult<&ShopItem> {
        self.get(id)
            .ok_or_else(|| GameError::not_found(RecordKind::ShopItem, id))
    }

    /// Earnings of one commodity trade.
    pub fn trade(rng: &mut (impl RandomSource + ?Sized), earnings: RollRange) -> u32 {
        rng.range(earnings.min, earnings.max)
    }
}
