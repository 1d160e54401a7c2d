//! Tier rows and container addressing.
//!
//! # Invariants
//! - The pool is addressed by the reserved id `pool`; tier ids never use it.
//! - Tier item order is display order; drops always append.

use crate::color::hex::HexColor;
use crate::model::item::Item;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable tier row identifier, e.g. `t1`.
pub type TierId = String;

/// Textual container id of the unranked pool.
pub const POOL_CONTAINER_ID: &str = "pool";

/// Drop target: the pool or one tier row.
///
/// Only the textual form (`pool` or a tier id) crosses boundaries, via
/// [`Display`] and [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Pool,
    Tier(TierId),
}

impl ContainerId {
    pub fn tier(id: impl Into<TierId>) -> Self {
        Self::Tier(id.into())
    }
}

impl From<&str> for ContainerId {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed == POOL_CONTAINER_ID {
            Self::Pool
        } else {
            Self::Tier(trimmed.to_string())
        }
    }
}

impl FromStr for ContainerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for ContainerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool => f.write_str(POOL_CONTAINER_ID),
            Self::Tier(id) => f.write_str(id),
        }
    }
}

/// Initial configuration of one tier row (no items).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTemplate {
    pub id: TierId,
    pub label: String,
    pub color: HexColor,
}

impl TierTemplate {
    pub fn new(id: impl Into<TierId>, label: impl Into<String>, color: HexColor) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color,
        }
    }
}

/// One labeled, colored ranking row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: TierId,
    pub label: String,
    pub color: HexColor,
    pub items: Vec<Item>,
}

impl Tier {
    /// Builds an empty row from its template.
    pub fn from_template(template: &TierTemplate) -> Self {
        Self {
            id: template.id.clone(),
            label: template.label.clone(),
            color: template.color.clone(),
            items: Vec::new(),
        }
    }
}
