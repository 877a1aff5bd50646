//! Handlers for the `/resources` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::error::CoreError;
use plaza_core::types::DbId;
use plaza_db::models::resource::{CreateResource, UpdateResource};
use plaza_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/resources
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let resources = ResourceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// POST /api/v1/resources
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateResource>,
) -> AppResult<impl IntoResponse> {
    // Premium resources are listings with a price; free ones need a file.
    if input.is_premium.unwrap_or(false) && input.price.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Premium resources require a price".into(),
        )));
    }

    let resource = ResourceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: resource })))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(DataResponse { data: resource }))
}

/// PUT /api/v1/resources/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResource>,
) -> AppResult<impl IntoResponse> {
    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(DataResponse { data: resource }))
}

/// DELETE /api/v1/resources/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ResourceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))
    }
}

/// POST /api/v1/resources/{id}/feature
///
/// Flip the featured flag, returning the updated row.
pub async fn toggle_feature(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resource = ResourceRepo::toggle_featured(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        resource_id = id,
        featured = resource.featured,
        "Resource featured flag toggled"
    );

    Ok(Json(DataResponse { data: resource }))
}
