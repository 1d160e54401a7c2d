//! Board configuration: initial tiers, preset palette and seed words.
//!
//! # Responsibility
//! - Provide the default five-row board and its preset colors.
//! - Load and validate host-provided JSON overrides.
//!
//! # Invariants
//! - A validated config has at least one tier, unique non-blank tier ids
//!   without surrounding whitespace, no tier named `pool`, a non-empty palette
//!   and no blank seed words.

use crate::color::hex::HexColor;
use crate::model::tier::{TierTemplate, POOL_CONTAINER_ID};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default tier rows as `(id, label, color)`.
const DEFAULT_TIERS: &[(&str, &str, &str)] = &[
    ("t1", "夯", "#FF7F7F"),
    ("t2", "顶级", "#FFBF7F"),
    ("t3", "人上人", "#FFDF7F"),
    ("t4", "NPC", "#BFFF7F"),
    ("t5", "拉", "#7FFFFF"),
];

/// Preset tier colors offered by the edit dialog.
const DEFAULT_PALETTE: &[&str] = &[
    "#FF7F7F", "#FFBF7F", "#FFDF7F", "#FFFF7F", "#BFFF7F", "#7FFF7F", "#7FFFFF", "#7FBFFF",
    "#7F7FFF", "#FF7FFF",
];

/// Seed list for the pool on first load.
const DEFAULT_SEED_WORDS: &[&str] = &[
    "var",
    "let",
    "const",
    "function",
    "=>",
    "class",
    "this",
    "prototype",
    "closure",
    "hoisting",
    "typeof",
    "instanceof",
    "==",
    "===",
    "null",
    "undefined",
    "NaN",
    "Promise",
    "async/await",
    "generator",
    "Symbol",
    "Proxy",
    "with",
    "eval",
    "label:",
    "void 0",
    "?.",
    "??",
    "...spread",
    "destructuring",
    "template literal",
    "getter/setter",
];

/// Errors from config loading/validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Config declares no tier rows.
    NoTiers,
    /// A tier id is blank after trim.
    BlankTierId,
    /// A tier id has leading or trailing whitespace.
    UntrimmedTierId(String),
    /// A tier uses the reserved pool container id.
    ReservedTierId,
    /// Two tiers share one id.
    DuplicateTierId(String),
    /// Palette declares no colors.
    EmptyPalette,
    /// Seed word at the given index is blank.
    BlankSeedWord(usize),
    /// Built-in defaults carry a malformed color.
    InvalidColor(String),
    /// JSON input could not be decoded.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTiers => write!(f, "board config must declare at least one tier"),
            Self::BlankTierId => write!(f, "tier id must not be blank"),
            Self::UntrimmedTierId(id) => {
                write!(f, "tier id `{id}` must not have surrounding whitespace")
            }
            Self::ReservedTierId => {
                write!(f, "tier id `{POOL_CONTAINER_ID}` is reserved for the pool")
            }
            Self::DuplicateTierId(id) => write!(f, "duplicate tier id: {id}"),
            Self::EmptyPalette => write!(f, "palette must contain at least one color"),
            Self::BlankSeedWord(index) => write!(f, "seed word #{index} must not be blank"),
            Self::InvalidColor(value) => write!(f, "invalid color: {value}"),
            Self::Parse(err) => write!(f, "invalid board config json: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Static board setup used for session start and reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Tier rows in display order.
    pub tiers: Vec<TierTemplate>,
    /// Preset colors for tier recoloring.
    pub palette: Vec<HexColor>,
    /// Text items placed in the pool on first load.
    pub seed_words: Vec<String>,
}

/// Same as [`BoardConfig::builtin`]. Yields an empty board if a built-in
/// color literal fails to parse; `builtin_config_is_valid_five_row_board`
/// covers the literals.
impl Default for BoardConfig {
    fn default() -> Self {
        Self::builtin().unwrap_or_else(|_| Self {
            tiers: Vec::new(),
            palette: Vec::new(),
            seed_words: Vec::new(),
        })
    }
}

impl BoardConfig {
    /// Builds the built-in five-row configuration.
    pub fn builtin() -> Result<Self, ConfigError> {
        let parse = |value: &str| {
            HexColor::parse(value).map_err(|_| ConfigError::InvalidColor(value.to_string()))
        };

        let tiers = DEFAULT_TIERS
            .iter()
            .map(|(id, label, color)| -> Result<TierTemplate, ConfigError> {
                Ok(TierTemplate::new(*id, *label, parse(*color)?))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        let palette = DEFAULT_PALETTE
            .iter()
            .map(|color| parse(*color))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            tiers,
            palette,
            seed_words: DEFAULT_SEED_WORDS.iter().map(|word| word.to_string()).collect(),
        })
    }

    /// Parses JSON and validates the result.
    ///
    /// Missing fields fall back to the built-in defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks declaration-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }

        let mut seen = HashSet::new();
        for tier in &self.tiers {
            let id = tier.id.trim();
            if id.is_empty() {
                return Err(ConfigError::BlankTierId);
            }
            // Drop targets are trimmed before lookup.
            if id != tier.id {
                return Err(ConfigError::UntrimmedTierId(tier.id.clone()));
            }
            if id == POOL_CONTAINER_ID {
                return Err(ConfigError::ReservedTierId);
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateTierId(id.to_string()));
            }
        }

        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        if let Some(index) = self.seed_words.iter().position(|word| word.trim().is_empty()) {
            return Err(ConfigError::BlankSeedWord(index));
        }

        Ok(())
    }
}
