//! Application services orchestrating entities, validation, and the
//! persistence ports.

mod group_block;
mod like;
mod post;

pub use group_block::GroupBlockService;
pub use like::LikeService;
pub use post::{PostDeletion, PostService};
