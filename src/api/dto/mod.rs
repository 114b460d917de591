//! Request and response DTOs for the JSON API.

pub mod clicks;
pub mod health;
pub mod route;
pub mod stats;
