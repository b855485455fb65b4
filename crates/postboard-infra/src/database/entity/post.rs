//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for postboard_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            text: model.text,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// Every column is `Set`, so saving this model issues an UPDATE keyed by id.
impl From<postboard_core::domain::Post> for ActiveModel {
    fn from(post: postboard_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            text: Set(post.text),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}

/// Insert model for a new post; `id` is left to the sequence.
impl From<postboard_core::domain::NewPost> for ActiveModel {
    fn from(post: postboard_core::domain::NewPost) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: sea_orm::NotSet,
            title: Set(post.title),
            text: Set(post.text),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
