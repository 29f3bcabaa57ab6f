use sea_orm::*;
use uuid::Uuid;

use crate::models::categories::{self, CreateCategory};
use crate::query::QuerySpec;

/// Insert a new category.
pub async fn insert_category(
    db: &DatabaseConnection,
    input: CreateCategory,
) -> Result<categories::Model, DbErr> {
    let new_category = categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
    };

    new_category.insert(db).await
}

/// Fetch categories, scoped by the request's query spec.
pub async fn get_categories(
    db: &DatabaseConnection,
    spec: &QuerySpec,
) -> Result<Vec<categories::Model>, DbErr> {
    spec.scope(categories::Entity::find()).all(db).await
}

/// Fetch categories matching a name, scoped by the request's query spec.
pub async fn get_categories_by_name(
    db: &DatabaseConnection,
    name: &str,
    spec: &QuerySpec,
) -> Result<Vec<categories::Model>, DbErr> {
    spec.scope(categories::Entity::find().filter(categories::Column::Name.eq(name)))
        .all(db)
        .await
}

/// Fetch a single category by ID.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<categories::Model>, DbErr> {
    categories::Entity::find_by_id(id).one(db).await
}

/// Delete categories by name, returning the number of rows removed.
pub async fn delete_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<DeleteResult, DbErr> {
    categories::Entity::delete_many()
        .filter(categories::Column::Name.eq(name))
        .exec(db)
        .await
}
