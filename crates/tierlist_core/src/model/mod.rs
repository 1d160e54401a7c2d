//! Tier list domain model.
//!
//! # Responsibility
//! - Define items, tier rows and container addressing used by the store.
//! - Keep item payloads as a sum type so each kind carries only its fields.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Item location lives in containers, never on the item itself.

pub mod id;
pub mod item;
pub mod snapshot;
pub mod tier;
