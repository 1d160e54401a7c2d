//! Interactive board session.
//!
//! # Responsibility
//! - Bind a `PlacementStore` to its `BoardConfig`.
//! - Track transient UI state: the tier being edited and the item being
//!   dragged.
//! - Translate drag/drop and edit-dialog gestures into store operations.
//!
//! # Invariants
//! - `editing_tier` always names an existing tier or is `None`.
//! - A drop consumes the current drag, whether or not the move applied.
//! - Reset restores configured tiers, empties the pool and clears UI state.

use crate::color::hex::HexColor;
use crate::config::BoardConfig;
use crate::model::id::{ItemIdGenerator, UuidIdGenerator};
use crate::model::item::{ImageRef, Item, ItemId};
use crate::model::snapshot::BoardSnapshot;
use crate::model::tier::{ContainerId, TierId};
use crate::service::placement_store::PlacementStore;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One user's board plus its transient interaction state.
#[derive(Debug)]
pub struct Session {
    config: BoardConfig,
    store: PlacementStore,
    editing_tier: Option<TierId>,
    dragging: Option<ItemId>,
}

impl Session {
    /// Starts a session with UUID ids, entropy randomness and seeded pool.
    pub fn new(config: BoardConfig) -> Self {
        Self::seeded(config, Box::new(UuidIdGenerator), StdRng::from_entropy())
    }

    /// Starts a session with injected sources and the seed words in the pool.
    pub fn seeded(
        config: BoardConfig,
        ids: Box<dyn ItemIdGenerator + Send>,
        rng: StdRng,
    ) -> Self {
        let mut session = Self::empty(config, ids, rng);
        let words = session.config.seed_words.clone();
        session.store.seed_pool(&words);
        session
    }

    /// Starts a session with configured tiers and an empty pool.
    pub fn empty(config: BoardConfig, ids: Box<dyn ItemIdGenerator + Send>, rng: StdRng) -> Self {
        let store = PlacementStore::with_sources(&config.tiers, ids, rng);
        info!(
            "event=session_start module=session status=ok tiers={} seed_words={}",
            config.tiers.len(),
            config.seed_words.len()
        );
        Self {
            config,
            store,
            editing_tier: None,
            dragging: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    pub fn add_text(&mut self, text: &str) -> Option<Item> {
        self.store.create_text_item(text)
    }

    pub fn add_image(&mut self, image: ImageRef) -> Item {
        self.store.create_image_item(image)
    }

    /// Direct move, bypassing drag state.
    pub fn move_item(&mut self, item_id: ItemId, target: &ContainerId) {
        self.store.move_item(item_id, target);
    }

    /// Records the start of a drag. Unknown items are ignored.
    pub fn begin_drag(&mut self, item_id: ItemId) {
        if self.store.item(item_id).is_none() {
            debug!("event=drag_start module=session status=rejected item={item_id}");
            return;
        }
        self.dragging = Some(item_id);
    }

    /// Cancels the current drag without moving anything.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<ItemId> {
        self.dragging
    }

    /// Drops the dragged item onto `target`. No-op when nothing is dragged.
    pub fn drop_on(&mut self, target: &ContainerId) {
        let Some(item_id) = self.dragging.take() else {
            debug!("event=drop module=session status=ignored reason=no_drag");
            return;
        };
        self.store.move_item(item_id, target);
    }

    /// Opens the edit dialog for a tier. Unknown ids are ignored.
    pub fn begin_edit(&mut self, tier_id: &str) {
        if self.store.tier(tier_id).is_some() {
            self.editing_tier = Some(tier_id.to_string());
        }
    }

    pub fn end_edit(&mut self) {
        self.editing_tier = None;
    }

    pub fn editing_tier(&self) -> Option<&str> {
        self.editing_tier.as_deref()
    }

    pub fn rename_tier(&mut self, tier_id: &str, label: impl Into<String>) {
        self.store.rename_tier(tier_id, label);
    }

    pub fn recolor_tier(&mut self, tier_id: &str, color: HexColor) {
        self.store.recolor_tier(tier_id, color);
    }

    /// Recolors a tier with the palette entry at `index`.
    ///
    /// Out-of-range indexes are ignored.
    pub fn pick_palette_color(&mut self, tier_id: &str, index: usize) {
        match self.config.palette.get(index) {
            Some(color) => self.store.recolor_tier(tier_id, color.clone()),
            None => debug!(
                "event=tier_recolor module=session status=rejected reason=palette_index index={index}"
            ),
        }
    }

    /// Restores the configured tiers, empties the pool and clears UI state.
    pub fn reset(&mut self) {
        self.store.reset_all(&self.config.tiers);
        self.editing_tier = None;
        self.dragging = None;
    }

    /// Copies the current board into a serializable view model.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tiers: self.store.tiers().to_vec(),
            pool: self.store.pool().to_vec(),
            editing_tier: self.editing_tier.clone(),
            dragging: self.dragging,
        }
    }
}
