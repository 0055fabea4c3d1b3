//! Cosmetic avatar system.
//!
//! Mirrors the region unlock pattern in its own namespace: completing a
//! collection set unlocks the avatar part named by the set definition.

pub mod data;
pub mod manager;

pub use data::{default_part, get_part, AvatarPart, PartCategory, ALL_PARTS};
pub use manager::AvatarManager;
