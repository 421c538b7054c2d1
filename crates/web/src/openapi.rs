//! OpenAPI documentation.

use utoipa::OpenApi;

use common::ErrorBody;
use domain::User;

use crate::dto::UserPayload;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "User Management API", description = "CRUD over user records"),
    paths(
        crate::handlers::user_api::list_users,
        crate::handlers::user_api::get_user,
        crate::handlers::user_api::create_user,
        crate::handlers::user_api::update_user,
        crate::handlers::user_api::delete_user,
    ),
    components(schemas(User, UserPayload, ErrorBody)),
    tags((name = "Users", description = "User management endpoints"))
)]
pub struct ApiDoc;
