//! HTTP handlers.

pub mod health_handler;
pub mod user_api;
pub mod user_pages;

pub use health_handler::health_routes;
pub use user_api::user_api_routes;
pub use user_pages::user_page_routes;
