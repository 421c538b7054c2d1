//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The store, the JSON API and the HTML pages all speak these types.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{User, UserDetails};
