//! Handlers for the `/opportunities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::error::CoreError;
use plaza_core::types::DbId;
use plaza_db::models::opportunity::{CreateOpportunity, UpdateOpportunity};
use plaza_db::repositories::OpportunityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/opportunities
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let opportunities = OpportunityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: opportunities,
    }))
}

/// POST /api/v1/opportunities
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateOpportunity>,
) -> AppResult<impl IntoResponse> {
    let opportunity = OpportunityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: opportunity })))
}

/// GET /api/v1/opportunities/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let opportunity = OpportunityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Opportunity",
            id,
        }))?;
    Ok(Json(DataResponse { data: opportunity }))
}

/// PUT /api/v1/opportunities/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOpportunity>,
) -> AppResult<impl IntoResponse> {
    let opportunity = OpportunityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Opportunity",
            id,
        }))?;
    Ok(Json(DataResponse { data: opportunity }))
}

/// DELETE /api/v1/opportunities/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OpportunityRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Opportunity",
            id,
        }))
    }
}

/// POST /api/v1/opportunities/{id}/feature
///
/// Flip the featured flag, returning the updated row.
pub async fn toggle_feature(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let opportunity = OpportunityRepo::toggle_featured(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Opportunity",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        opportunity_id = id,
        featured = opportunity.featured,
        "Opportunity featured flag toggled"
    );

    Ok(Json(DataResponse { data: opportunity }))
}
