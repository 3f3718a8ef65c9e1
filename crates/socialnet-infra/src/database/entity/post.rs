//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(nullable)]
    pub group_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Post, via the trusted path.
impl From<Model> for socialnet_core::domain::Post {
    fn from(model: Model) -> Self {
        Self::rehydrate(
            model.id,
            model.author_id,
            model.group_id,
            model.content,
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from domain Post to SeaORM ActiveModel.
impl From<socialnet_core::domain::Post> for ActiveModel {
    fn from(post: socialnet_core::domain::Post) -> Self {
        Self {
            id: Set(post.id()),
            author_id: Set(post.author_id()),
            group_id: Set(post.group_id()),
            content: Set(post.content().to_string()),
            created_at: Set(post.created_at().into()),
            updated_at: Set(post.updated_at().into()),
        }
    }
}
