//! Domain types and editor rules.

pub mod difficulty;
pub mod recipe;

pub use difficulty::Difficulty;
pub use recipe::{Recipe, RecipeDraft};
