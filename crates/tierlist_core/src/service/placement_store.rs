//! Item placement store.
//!
//! # Responsibility
//! - Own the pool and tier rows, and the items inside them.
//! - Provide create/move/reset/rename/recolor entry points.
//!
//! # Invariants
//! - Every item lives in exactly one container (pool or one tier).
//! - `move_item` validates both ends before touching state, so a rejected
//!   move leaves every container unchanged.
//! - Placement never adds, removes or reorders tier rows.
//! - Blank text is rejected before any color is generated.
//!
//! Public mutators are silent no-ops on invalid input; the `try_` variants
//! report why an operation was rejected.

use crate::color::hex::HexColor;
use crate::color::pair::ColorPairGenerator;
use crate::model::id::{ItemIdGenerator, UuidIdGenerator};
use crate::model::item::{ImageRef, Item, ItemId};
use crate::model::tier::{ContainerId, Tier, TierId, TierTemplate};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reasons a placement operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Submitted text is empty after trim.
    BlankText,
    /// Item is not present in any container.
    ItemNotFound(ItemId),
    /// Target container does not exist.
    ContainerNotFound(ContainerId),
    /// Tier row does not exist.
    TierNotFound(TierId),
}

impl Display for PlacementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "item text must not be blank"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::ContainerNotFound(id) => write!(f, "container not found: {id}"),
            Self::TierNotFound(id) => write!(f, "tier not found: {id}"),
        }
    }
}

impl Error for PlacementError {}

/// Resolved container position inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Pool,
    Tier(usize),
}

/// Single owner of all item placements.
pub struct PlacementStore {
    pool: Vec<Item>,
    tiers: Vec<Tier>,
    ids: Box<dyn ItemIdGenerator + Send>,
    rng: StdRng,
    colors: ColorPairGenerator,
}

impl std::fmt::Debug for PlacementStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementStore")
            .field("pool", &self.pool)
            .field("tiers", &self.tiers)
            .finish_non_exhaustive()
    }
}

impl PlacementStore {
    /// Creates an empty store with UUID ids and an entropy-seeded RNG.
    pub fn new(tiers: &[TierTemplate]) -> Self {
        Self::with_sources(tiers, Box::new(UuidIdGenerator), StdRng::from_entropy())
    }

    /// Creates an empty store with injected id and randomness sources.
    pub fn with_sources(
        tiers: &[TierTemplate],
        ids: Box<dyn ItemIdGenerator + Send>,
        rng: StdRng,
    ) -> Self {
        Self {
            pool: Vec::new(),
            tiers: tiers.iter().map(Tier::from_template).collect(),
            ids,
            rng,
            colors: ColorPairGenerator::default(),
        }
    }

    /// Unranked items in insertion order.
    pub fn pool(&self) -> &[Item] {
        &self.pool
    }

    /// Tier rows in display order.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn tier(&self, tier_id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.id == tier_id)
    }

    /// Items of one container, or `None` if the container is unknown.
    pub fn contents(&self, container: &ContainerId) -> Option<&[Item]> {
        self.resolve(container).map(|slot| self.slot_items(slot))
    }

    /// Total number of items across all containers.
    pub fn item_count(&self) -> usize {
        self.pool.len() + self.tiers.iter().map(|tier| tier.items.len()).sum::<usize>()
    }

    /// Looks up an item anywhere on the board.
    pub fn item(&self, item_id: ItemId) -> Option<&Item> {
        let (slot, position) = self.locate_slot(item_id)?;
        self.slot_items(slot).get(position)
    }

    /// Returns the container currently holding `item_id`.
    pub fn locate(&self, item_id: ItemId) -> Option<ContainerId> {
        let (slot, _) = self.locate_slot(item_id)?;
        Some(self.container_id(slot))
    }

    /// Adds a text item to the pool with a freshly generated color pair.
    ///
    /// Returns `None` without touching state when `text` is blank.
    pub fn create_text_item(&mut self, text: &str) -> Option<Item> {
        match self.try_create_text_item(text) {
            Ok(item) => Some(item),
            Err(err) => {
                debug!("event=item_create module=placement status=rejected reason={err}");
                None
            }
        }
    }

    /// Like [`Self::create_text_item`], reporting blank input as an error.
    pub fn try_create_text_item(&mut self, text: &str) -> Result<Item, PlacementError> {
        if text.trim().is_empty() {
            return Err(PlacementError::BlankText);
        }
        Ok(self.insert_text_item(text))
    }

    /// Adds an image item to the pool.
    pub fn create_image_item(&mut self, image: ImageRef) -> Item {
        let item = Item::image(self.ids.next_id(), image);
        debug!(
            "event=item_create module=placement status=ok kind=image item={}",
            item.id
        );
        self.pool.push(item.clone());
        item
    }

    /// Appends seed words to the pool as text items.
    ///
    /// Seeds skip the blank-text guard; config validation keeps them
    /// non-blank.
    pub fn seed_pool<S: AsRef<str>>(&mut self, words: &[S]) -> usize {
        for word in words {
            self.insert_text_item(word.as_ref());
        }
        debug!(
            "event=pool_seed module=placement status=ok count={}",
            words.len()
        );
        words.len()
    }

    /// Moves an item to the end of `target`.
    ///
    /// Silently ignores unknown items and containers. Dropping an item back
    /// onto its own container moves it to the end of that container.
    pub fn move_item(&mut self, item_id: ItemId, target: &ContainerId) {
        if let Err(err) = self.try_move_item(item_id, target) {
            debug!("event=item_move module=placement status=rejected reason={err}");
        }
    }

    /// Like [`Self::move_item`], reporting the rejection reason.
    pub fn try_move_item(
        &mut self,
        item_id: ItemId,
        target: &ContainerId,
    ) -> Result<(), PlacementError> {
        let target_slot = self
            .resolve(target)
            .ok_or_else(|| PlacementError::ContainerNotFound(target.clone()))?;
        let (source_slot, position) = self
            .locate_slot(item_id)
            .ok_or(PlacementError::ItemNotFound(item_id))?;

        let item = self.slot_items_mut(source_slot).remove(position);
        self.slot_items_mut(target_slot).push(item);

        debug!(
            "event=item_move module=placement status=ok item={} from={} to={}",
            item_id,
            self.container_id(source_slot),
            target
        );
        Ok(())
    }

    /// Replaces all tier rows with `initial_tiers` and discards every item.
    pub fn reset_all(&mut self, initial_tiers: &[TierTemplate]) {
        let discarded = self.item_count();
        self.pool.clear();
        self.tiers = initial_tiers.iter().map(Tier::from_template).collect();
        debug!(
            "event=board_reset module=placement status=ok tiers={} discarded={}",
            self.tiers.len(),
            discarded
        );
    }

    /// Sets a tier label verbatim. Unknown tier ids are ignored.
    pub fn rename_tier(&mut self, tier_id: &str, label: impl Into<String>) {
        if let Err(err) = self.try_rename_tier(tier_id, label) {
            debug!("event=tier_rename module=placement status=rejected reason={err}");
        }
    }

    pub fn try_rename_tier(
        &mut self,
        tier_id: &str,
        label: impl Into<String>,
    ) -> Result<(), PlacementError> {
        let tier = self.tier_mut(tier_id)?;
        tier.label = label.into();
        Ok(())
    }

    /// Sets a tier color. Unknown tier ids are ignored.
    pub fn recolor_tier(&mut self, tier_id: &str, color: HexColor) {
        if let Err(err) = self.try_recolor_tier(tier_id, color) {
            debug!("event=tier_recolor module=placement status=rejected reason={err}");
        }
    }

    pub fn try_recolor_tier(
        &mut self,
        tier_id: &str,
        color: HexColor,
    ) -> Result<(), PlacementError> {
        let tier = self.tier_mut(tier_id)?;
        tier.color = color;
        Ok(())
    }

    fn insert_text_item(&mut self, text: &str) -> Item {
        let colors = self.colors.generate(&mut self.rng);
        let item = Item::text(self.ids.next_id(), text, colors);
        debug!(
            "event=item_create module=placement status=ok kind=text item={}",
            item.id
        );
        self.pool.push(item.clone());
        item
    }

    fn tier_mut(&mut self, tier_id: &str) -> Result<&mut Tier, PlacementError> {
        self.tiers
            .iter_mut()
            .find(|tier| tier.id == tier_id)
            .ok_or_else(|| PlacementError::TierNotFound(tier_id.to_string()))
    }

    fn resolve(&self, container: &ContainerId) -> Option<Slot> {
        match container {
            ContainerId::Pool => Some(Slot::Pool),
            ContainerId::Tier(id) => self
                .tiers
                .iter()
                .position(|tier| &tier.id == id)
                .map(Slot::Tier),
        }
    }

    fn locate_slot(&self, item_id: ItemId) -> Option<(Slot, usize)> {
        if let Some(position) = self.pool.iter().position(|item| item.id == item_id) {
            return Some((Slot::Pool, position));
        }
        self.tiers.iter().enumerate().find_map(|(index, tier)| {
            tier.items
                .iter()
                .position(|item| item.id == item_id)
                .map(|position| (Slot::Tier(index), position))
        })
    }

    fn container_id(&self, slot: Slot) -> ContainerId {
        match slot {
            Slot::Pool => ContainerId::Pool,
            Slot::Tier(index) => ContainerId::Tier(self.tiers[index].id.clone()),
        }
    }

    fn slot_items(&self, slot: Slot) -> &[Item] {
        match slot {
            Slot::Pool => &self.pool,
            Slot::Tier(index) => &self.tiers[index].items,
        }
    }

    fn slot_items_mut(&mut self, slot: Slot) -> &mut Vec<Item> {
        match slot {
            Slot::Pool => &mut self.pool,
            Slot::Tier(index) => &mut self.tiers[index].items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PlacementError, PlacementStore};
    use crate::color::hex::HexColor;
    use crate::model::id::SequentialIdGenerator;
    use crate::model::tier::{ContainerId, TierTemplate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn store() -> PlacementStore {
        let tiers = vec![
            TierTemplate::new("a", "A", HexColor::parse("#ff0000").expect("valid color")),
            TierTemplate::new("b", "B", HexColor::parse("#00ff00").expect("valid color")),
        ];
        PlacementStore::with_sources(
            &tiers,
            Box::new(SequentialIdGenerator::default()),
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn try_create_rejects_blank_text() {
        let mut store = store();
        assert_eq!(
            store.try_create_text_item(" \t\n"),
            Err(PlacementError::BlankText)
        );
        assert!(store.pool().is_empty());
    }

    #[test]
    fn text_keeps_original_spacing() {
        let mut store = store();
        let item = store.create_text_item("  padded ").expect("non-blank text");
        assert_eq!(item.title(), Some("  padded "));
    }

    #[test]
    fn try_move_reports_unknown_target_before_unknown_item() {
        let mut store = store();
        let err = store
            .try_move_item(Uuid::from_u128(99), &ContainerId::tier("zzz"))
            .expect_err("unknown target must fail");
        assert_eq!(err, PlacementError::ContainerNotFound(ContainerId::tier("zzz")));

        let err = store
            .try_move_item(Uuid::from_u128(99), &ContainerId::Pool)
            .expect_err("unknown item must fail");
        assert_eq!(err, PlacementError::ItemNotFound(Uuid::from_u128(99)));
    }

    #[test]
    fn locate_tracks_item_across_moves() {
        let mut store = store();
        let item = store.create_text_item("x").expect("non-blank text");
        assert_eq!(store.locate(item.id), Some(ContainerId::Pool));

        store.move_item(item.id, &ContainerId::tier("b"));
        assert_eq!(store.locate(item.id), Some(ContainerId::tier("b")));
        assert_eq!(store.item(item.id), Some(&item));
    }

    #[test]
    fn try_rename_and_recolor_unknown_tier_fail() {
        let mut store = store();
        assert_eq!(
            store.try_rename_tier("nope", "X"),
            Err(PlacementError::TierNotFound("nope".to_string()))
        );
        let color = HexColor::parse("#123456").expect("valid color");
        assert_eq!(
            store.try_recolor_tier("nope", color),
            Err(PlacementError::TierNotFound("nope".to_string()))
        );
    }
}
