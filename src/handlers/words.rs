use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::categories as category_db;
use crate::db::words as word_db;
use crate::error::ApiError;
use crate::models::words::{self, CreateWord};
use crate::query::ListQuery;

/// GET /api/categories/{category_id}/words — list the words of a category.
/// Query params: ?limit=50&skip=0&order_by=term+asc (order_by may repeat).
pub async fn get_words(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: ListQuery<words::Entity>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let result = word_db::get_words_by_category(db.get_ref(), category_id, &query.spec).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /api/categories/{category_id}/words — add a word to a category.
pub async fn add_word(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<CreateWord>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();

    // Missing category must map to 404, not a foreign-key failure.
    if category_db::get_category_by_id(db.get_ref(), category_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!(
            "Category {category_id} not found"
        )));
    }

    let word = word_db::insert_word(db.get_ref(), category_id, body.into_inner()).await?;
    tracing::info!("created word {} in category {category_id}", word.term);
    Ok(HttpResponse::Created().json(word))
}

/// DELETE /api/categories/{category_id}/words/{word_id} — delete a word.
pub async fn del_word(
    db: web::Data<DatabaseConnection>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (category_id, word_id) = path.into_inner();
    let result = word_db::delete_word(db.get_ref(), category_id, word_id).await?;

    if result.rows_affected > 0 {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Word {word_id} deleted"),
        })))
    } else {
        Err(ApiError::NotFound(format!("Word {word_id} not found")))
    }
}
