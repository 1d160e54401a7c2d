//! Color primitives for tier rows and text items.
//!
//! # Responsibility
//! - Validate user/config supplied `#rrggbb` colors.
//! - Convert OKLCH targets into displayable sRGB hex.
//! - Generate legible color pairs for text items.

pub mod hex;
pub mod oklab;
pub mod pair;
