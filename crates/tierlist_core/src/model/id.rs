//! Item id generation.
//!
//! Random UUIDs in production; a sequential source keeps tests deterministic.

use crate::model::item::ItemId;
use uuid::Uuid;

/// Source of fresh, never-repeating item ids.
pub trait ItemIdGenerator {
    fn next_id(&mut self) -> ItemId;
}

/// UUID v4 generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl ItemIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ItemId {
        Uuid::new_v4()
    }
}

/// Counter-backed generator yielding `Uuid::from_u128(1)`, `(2)`, ...
///
/// Wraps to zero after `u128::MAX`.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u128) -> Self {
        Self { next: first }
    }
}

impl ItemIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ItemId {
        let id = Uuid::from_u128(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
