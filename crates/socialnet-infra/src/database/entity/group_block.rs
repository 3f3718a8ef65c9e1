//! Group block entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_blocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub group_id: Uuid,
    pub blocker_id: Uuid,
    pub blocked_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BlockerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blocker,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::BlockedId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blocked,
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain GroupBlock, via the trusted path.
impl From<Model> for socialnet_core::domain::GroupBlock {
    fn from(model: Model) -> Self {
        Self::rehydrate(
            model.id,
            model.group_id,
            model.blocker_id,
            model.blocked_id,
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from domain GroupBlock to SeaORM ActiveModel.
impl From<socialnet_core::domain::GroupBlock> for ActiveModel {
    fn from(block: socialnet_core::domain::GroupBlock) -> Self {
        Self {
            id: Set(block.id()),
            group_id: Set(block.group_id()),
            blocker_id: Set(block.blocker_id()),
            blocked_id: Set(block.blocked_id()),
            created_at: Set(block.created_at().into()),
            updated_at: Set(block.updated_at().into()),
        }
    }
}
