//! SeaORM entity models and their conversions to domain types.
//!
//! The Model-to-domain direction always goes through `rehydrate`: rows read
//! from storage are trusted and never re-validated.

pub mod group_block;
pub mod like;
pub mod post;
pub mod user;
