//! Server-rendered user pages.
//!
//! Successful writes redirect back to the list (303). Rejected submissions
//! re-render the form with status 400, keeping what the user typed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use validator::Validate;

use common::AppError;

use crate::dto::UserPayload;
use crate::extractors::to_field_errors;
use crate::state::AppState;
use crate::views::{
    self,
    users::{form_page, list_page, FormErrors, FormMode},
};

/// Create user page routes
pub fn user_page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/create", get(create_form).post(create))
        .route("/edit/:code", get(edit_form).post(edit))
        .route("/delete/:code", post(delete))
}

/// User list
pub async fn index(State(state): State<AppState>) -> Response {
    match state.users.get_all().await {
        Ok(users) => Html(list_page(&users)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_form() -> Html<String> {
    Html(form_page(
        &FormMode::Create,
        &UserPayload::default(),
        &FormErrors::default(),
    ))
}

pub async fn create(State(state): State<AppState>, Form(payload): Form<UserPayload>) -> Response {
    submit(&state, FormMode::Create, payload).await
}

pub async fn edit_form(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match state.users.get_by_code(&code).await {
        Ok(Some(user)) => Html(form_page(
            &FormMode::Edit { code },
            &UserPayload::from(&user),
            &FormErrors::default(),
        ))
        .into_response(),
        Ok(None) => error_response(AppError::UserNotFound(code)),
        Err(e) => error_response(e),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Form(mut payload): Form<UserPayload>,
) -> Response {
    // The path decides which user is edited
    payload.code = code.clone();
    submit(&state, FormMode::Edit { code }, payload).await
}

pub async fn delete(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match state.users.delete(&code).await {
        Ok(()) => Redirect::to("/users").into_response(),
        Err(e) => error_response(e),
    }
}

/// Validate and store a submitted form.
async fn submit(state: &AppState, mode: FormMode, payload: UserPayload) -> Response {
    if let Err(errors) = payload.validate() {
        let err = AppError::validation(to_field_errors(&errors));
        return rejected_form(&mode, &payload, &err);
    }

    let details = match payload.clone().into_details() {
        Ok(details) => details,
        Err(e) => return rejected_form(&mode, &payload, &e),
    };

    let result = match &mode {
        FormMode::Create => state.users.add(details).await,
        FormMode::Edit { .. } => state.users.update(details).await,
    };

    match result {
        Ok(_) => Redirect::to("/users").into_response(),
        // The user vanished between loading and saving the form
        Err(e @ AppError::UserNotFound(_)) => error_response(e),
        Err(e) if e.is_client_error() => rejected_form(&mode, &payload, &e),
        Err(e) => error_response(e),
    }
}

fn rejected_form(mode: &FormMode, payload: &UserPayload, err: &AppError) -> Response {
    let page = form_page(mode, payload, &FormErrors::from_error(err));
    (StatusCode::BAD_REQUEST, Html(page)).into_response()
}

/// Render a failure as a full page with the matching status.
fn error_response(err: AppError) -> Response {
    let status = err.status();
    let body = err.body();
    let title = match status {
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::BAD_REQUEST => "Bad Request",
        _ => "Error",
    };
    (status, Html(views::error_page(title, &body.message))).into_response()
}
