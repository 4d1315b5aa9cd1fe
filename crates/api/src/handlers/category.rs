//! Handlers for the `/categories` resource.
//!
//! Category administration is admin-only; listing and reading are open to
//! any authenticated user so record forms can render themselves.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use causeway_core::error::CoreError;
use causeway_core::types::DbId;
use causeway_db::models::category::{
    Category, CategoryWithFieldCount, CategoryWithFields, CreateCategory, UpdateCategory,
};
use causeway_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// All categories with their derived field counts.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategoryWithFieldCount>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    validate_name(&input.name)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        admin_id = admin.user_id,
        category_id = category.id,
        name = %category.name,
        "Category created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories/{id}
///
/// One category together with its fields, sorted by display order.
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CategoryWithFields>>> {
    let category = CategoryRepo::find_with_fields(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if let Some(name) = &input.name {
        validate_name(name)?;
    }
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Irreversible: the category's fields and every stored field value go
/// with it. The UI is expected to confirm before calling this.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::warn!(
            admin_id = admin.user_id,
            category_id = id,
            "Category deleted with all fields and stored values",
        );
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "category name is required".to_string(),
        )));
    }
    Ok(())
}
