use sea_orm::*;
use uuid::Uuid;

use crate::models::words::{self, CreateWord};
use crate::query::QuerySpec;

/// Insert a new word into a category.
pub async fn insert_word(
    db: &DatabaseConnection,
    category_id: Uuid,
    input: CreateWord,
) -> Result<words::Model, DbErr> {
    let new_word = words::ActiveModel {
        id: Set(Uuid::new_v4()),
        term: Set(input.term),
        def: Set(input.def),
        category_id: Set(category_id),
    };

    new_word.insert(db).await
}

/// Fetch the words of a category, scoped by the request's query spec.
pub async fn get_words_by_category(
    db: &DatabaseConnection,
    category_id: Uuid,
    spec: &QuerySpec,
) -> Result<Vec<words::Model>, DbErr> {
    spec.scope(words::Entity::find().filter(words::Column::CategoryId.eq(category_id)))
        .all(db)
        .await
}

/// Delete one word of a category, returning the number of rows removed.
pub async fn delete_word(
    db: &DatabaseConnection,
    category_id: Uuid,
    word_id: Uuid,
) -> Result<DeleteResult, DbErr> {
    words::Entity::delete_many()
        .filter(words::Column::Id.eq(word_id))
        .filter(words::Column::CategoryId.eq(category_id))
        .exec(db)
        .await
}
