use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::db::categories as category_db;
use crate::error::ApiError;
use crate::models::categories::{self, CreateCategory};
use crate::query::ListQuery;

/// GET /api/categories — list categories.
/// Query params: ?limit=50&skip=0&order_by=name+desc (order_by may repeat).
pub async fn get_categories(
    db: web::Data<DatabaseConnection>,
    query: ListQuery<categories::Entity>,
) -> Result<HttpResponse, ApiError> {
    let result = category_db::get_categories(db.get_ref(), &query.spec).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/categories/{name} — list the categories matching a name.
pub async fn get_category_by_name(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    query: ListQuery<categories::Entity>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    let result = category_db::get_categories_by_name(db.get_ref(), &name, &query.spec).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /api/categories — create a new category.
pub async fn add_category(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateCategory>,
) -> Result<HttpResponse, ApiError> {
    let category = category_db::insert_category(db.get_ref(), body.into_inner()).await?;
    tracing::info!("created category {}", category.name);
    Ok(HttpResponse::Created().json(category))
}

/// DELETE /api/categories/{name} — delete a category by name.
pub async fn del_category(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    let result = category_db::delete_category_by_name(db.get_ref(), &name).await?;

    if result.rows_affected > 0 {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!("category rows deleted {}", result.rows_affected),
        })))
    } else {
        Err(ApiError::NotFound(format!("Category {name} not found")))
    }
}
