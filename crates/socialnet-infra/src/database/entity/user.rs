//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain User, via the trusted path.
///
/// The relation id-lists are not loaded here; the row alone rehydrates to a
/// user with empty relations.
impl From<Model> for socialnet_core::domain::User {
    fn from(model: Model) -> Self {
        Self::rehydrate(
            model.id,
            model.username,
            model.email,
            model.password_hash,
            model.created_at.into(),
            model.updated_at.into(),
        )
    }
}

/// Conversion from domain User to SeaORM ActiveModel.
impl From<socialnet_core::domain::User> for ActiveModel {
    fn from(user: socialnet_core::domain::User) -> Self {
        Self {
            id: Set(user.id()),
            username: Set(user.username().to_string()),
            email: Set(user.email().to_string()),
            password_hash: Set(user.password_hash().to_string()),
            created_at: Set(user.created_at().into()),
            updated_at: Set(user.updated_at().into()),
        }
    }
}
