//! Core use-case services.
//!
//! # Responsibility
//! - Own board state and expose the enumerated placement operations.
//! - Keep host/UI layers away from direct container mutation.

pub mod placement_store;
pub mod session;
