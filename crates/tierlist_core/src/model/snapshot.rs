//! Read-only view model handed to the rendering/export host.

use crate::model::item::{Item, ItemId};
use crate::model::tier::{Tier, TierId};
use serde::{Deserialize, Serialize};

/// Full board state at one point in time.
///
/// Built by copying store contents; mutating it never affects the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Tier rows in display order.
    pub tiers: Vec<Tier>,
    /// Unranked items in insertion order.
    pub pool: Vec<Item>,
    /// Tier currently open in the edit dialog.
    pub editing_tier: Option<TierId>,
    /// Item currently being dragged.
    pub dragging: Option<ItemId>,
}

impl BoardSnapshot {
    /// Total number of items across the pool and all tiers.
    pub fn item_count(&self) -> usize {
        self.pool.len() + self.tiers.iter().map(|tier| tier.items.len()).sum::<usize>()
    }
}
