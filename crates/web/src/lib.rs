//! User administration front-end.
//!
//! Serves the HTML pages, the JSON API and its Swagger UI over the user
//! store, plus the `serve`/`migrate` CLI that drives them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod views;

pub use config::WebConfig;
pub use routes::create_router;
pub use state::AppState;
