//! Property-based invariant tests for item placement.
//!
//! Verifies over arbitrary operation sequences:
//! 1. Exclusive ownership: every created item sits in exactly one container.
//! 2. Move correctness: a valid move appends the item to the end of the
//!    target and keeps the item count.
//! 3. Invalid moves (unknown item or unknown container) change nothing.
//! 4. Blank text creates nothing.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use tierlist_core::{
    ContainerId, HexColor, ImageRef, ItemId, PlacementStore, SequentialIdGenerator, TierTemplate,
};
use uuid::Uuid;

/// `pool` and `t1`..`t3` resolve; the rest name no container.
const TARGETS: &[&str] = &["pool", "t1", "t2", "t3", " t2 ", "t9", "POOL", ""];

/// Item slots past the created count address ids the store never issued.
const ITEM_SLOTS: usize = 12;

#[derive(Debug, Clone)]
enum Op {
    Text(String),
    Image,
    Move { item: usize, target: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => prop_oneof!["[a-z]{1,6}", "[ \t\n]{0,3}"].prop_map(Op::Text),
        1 => Just(Op::Image),
        5 => (0..ITEM_SLOTS, 0..TARGETS.len())
            .prop_map(|(item, target)| Op::Move { item, target }),
    ]
}

fn store() -> PlacementStore {
    let tiers: Vec<TierTemplate> = (1..=3)
        .map(|n| {
            let color = HexColor::parse("#7F7FFF").expect("literal color");
            TierTemplate::new(format!("t{n}"), format!("Tier {n}"), color)
        })
        .collect();
    PlacementStore::with_sources(
        &tiers,
        Box::new(SequentialIdGenerator::default()),
        StdRng::seed_from_u64(11),
    )
}

fn item_for_slot(created: &[ItemId], slot: usize) -> ItemId {
    created
        .get(slot)
        .copied()
        .unwrap_or_else(|| Uuid::from_u128(0xffff_0000 + slot as u128))
}

fn ownership_counts(store: &PlacementStore) -> HashMap<ItemId, usize> {
    let mut counts = HashMap::new();
    let containers = std::iter::once(store.pool())
        .chain(store.tiers().iter().map(|tier| &tier.items[..]));
    for item in containers.flatten() {
        *counts.entry(item.id).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn every_item_has_exactly_one_owner(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = store();
        let mut created = Vec::new();
        for op in ops {
            match op {
                Op::Text(text) => {
                    if let Some(item) = store.create_text_item(&text) {
                        created.push(item.id);
                    }
                }
                Op::Image => created.push(store.create_image_item(ImageRef::new("blob:x")).id),
                Op::Move { item, target } => {
                    let item_id = item_for_slot(&created, item);
                    store.move_item(item_id, &ContainerId::from(TARGETS[target]));
                }
            }

            let counts = ownership_counts(&store);
            prop_assert_eq!(counts.len(), created.len());
            for id in &created {
                prop_assert_eq!(counts.get(id), Some(&1), "item {} must be owned once", id);
            }
            prop_assert_eq!(store.tiers().len(), 3);
        }
    }

    #[test]
    fn moves_append_or_change_nothing(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = store();
        let mut created = Vec::new();
        for op in ops {
            let pool_before = store.pool().to_vec();
            let tiers_before = store.tiers().to_vec();
            let count_before = store.item_count();

            match op {
                Op::Text(text) => {
                    let blank = text.trim().is_empty();
                    match store.create_text_item(&text) {
                        Some(item) => {
                            prop_assert!(!blank);
                            prop_assert_eq!(store.pool().last(), Some(&item));
                            created.push(item.id);
                        }
                        None => {
                            prop_assert!(blank);
                            prop_assert_eq!(store.pool(), &pool_before[..]);
                        }
                    }
                }
                Op::Image => created.push(store.create_image_item(ImageRef::new("blob:x")).id),
                Op::Move { item, target } => {
                    let item_id = item_for_slot(&created, item);
                    let target = ContainerId::from(TARGETS[target]);
                    let valid = created.contains(&item_id) && store.contents(&target).is_some();

                    store.move_item(item_id, &target);

                    prop_assert_eq!(store.item_count(), count_before);
                    if valid {
                        let contents = store.contents(&target).expect("known target");
                        prop_assert_eq!(contents.last().map(|moved| moved.id), Some(item_id));
                        prop_assert_eq!(store.locate(item_id), Some(target));
                    } else {
                        prop_assert_eq!(store.pool(), &pool_before[..]);
                        prop_assert_eq!(store.tiers(), &tiers_before[..]);
                    }
                }
            }
        }
    }
}
