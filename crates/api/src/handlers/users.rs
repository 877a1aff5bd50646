//! Handlers for admin user management under `/admin/users`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use plaza_core::error::CoreError;
use plaza_core::roles::ROLE_EDITOR;
use plaza_db::models::user::{CreateUser, CreateUserRequest};
use plaza_db::repositories::{RoleRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/users
///
/// List all admin users. Password hashes are never serialized.
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/admin/users
///
/// Create a new admin user. The role defaults to `editor`; a duplicate
/// email returns 409.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let role_name = input.role.as_deref().unwrap_or(ROLE_EDITOR);
    let role = RoleRepo::find_by_name(&state.pool, role_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown role: {role_name}")))
        })?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email.clone(),
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    tracing::info!(
        admin_id = admin.user_id,
        user_id = user.id,
        role = %role.name,
        "Admin user created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}
