//! Like entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(nullable)]
    pub post_id: Option<Uuid>,
    #[sea_orm(nullable)]
    pub comment_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Like, via the trusted path.
impl From<Model> for socialnet_core::domain::Like {
    fn from(model: Model) -> Self {
        Self::rehydrate(
            model.id,
            model.user_id,
            model.post_id,
            model.comment_id,
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from domain Like to SeaORM ActiveModel.
impl From<socialnet_core::domain::Like> for ActiveModel {
    fn from(like: socialnet_core::domain::Like) -> Self {
        Self {
            id: Set(like.id()),
            user_id: Set(like.user_id()),
            post_id: Set(like.post_id()),
            comment_id: Set(like.comment_id()),
            created_at: Set(like.created_at().into()),
            updated_at: Set(like.updated_at().into()),
        }
    }
}
