//! Handlers for the `/newsletter-signups` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::error::CoreError;
use plaza_core::types::DbId;
use plaza_db::models::newsletter::CreateNewsletterSignup;
use plaza_db::repositories::NewsletterSignupRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/newsletter-signups
pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let signups = NewsletterSignupRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: signups }))
}

/// POST /api/v1/newsletter-signups
///
/// Public endpoint backing the newsletter signup form. A duplicate email
/// returns 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNewsletterSignup>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    if !input.agreed {
        return Err(AppError::Core(CoreError::Validation(
            "Signup requires agreeing to receive the newsletter".into(),
        )));
    }

    let signup = NewsletterSignupRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: signup })))
}

/// DELETE /api/v1/newsletter-signups/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NewsletterSignupRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "NewsletterSignup",
            id,
        }))
    }
}
