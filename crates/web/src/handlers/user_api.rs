//! JSON API over the user store.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use common::{AppError, AppResult, ErrorBody, OptionExt};
use domain::User;

use crate::dto::UserPayload;
use crate::extractors::ValidatedJson;
use crate::state::AppState;
use crate::views::path_segment;

/// Create user API routes
pub fn user_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:code", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<User>),
        (status = 500, description = "Unexpected failure", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

/// Get user by code
#[utoipa::path(
    get,
    path = "/api/users/{code}",
    tag = "Users",
    params(("code" = String, Path, description = "User code")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Unexpected failure", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.users.get_by_code(&code).await?.ok_or_not_found(&code)?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User,
            headers(("Location" = String, description = "URL of the new user"))),
        (status = 400, description = "Validation failed or code/email taken", body = ErrorBody),
        (status = 500, description = "Unexpected failure", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<impl IntoResponse> {
    let user = state.users.add(payload.into_details()?).await?;
    let location = format!("/api/users/{}", path_segment(&user.code));

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Update a user
///
/// The path code selects the user and must equal the body code once both
/// are trimmed.
#[utoipa::path(
    put,
    path = "/api/users/{code}",
    tag = "Users",
    params(("code" = String, Path, description = "User code")),
    request_body = UserPayload,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Code mismatch, validation failed or email taken", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Unexpected failure", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(code): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> AppResult<StatusCode> {
    // Body values arrive trimmed
    let code = code.trim();
    if payload.code != code {
        return Err(AppError::CodeMismatch {
            path: code.to_string(),
            body: payload.code,
        });
    }

    state.users.update(payload.into_details()?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{code}",
    tag = "Users",
    params(("code" = String, Path, description = "User code")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 500, description = "Unexpected failure", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.users.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
