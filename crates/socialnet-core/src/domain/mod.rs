//! Domain entities - the core business objects.
//!
//! Every entity has exactly two construction paths: `create`, which generates
//! identity and timestamps and runs the validator, and `rehydrate`, which
//! trusts storage and skips validation. The raw constructors stay private to
//! each entity's module, and none of the entities derive `Deserialize`, so no
//! third path exists.

mod group_block;
mod like;
mod post;
mod user;

pub use group_block::GroupBlock;
pub use like::Like;
pub use post::Post;
pub use user::User;
