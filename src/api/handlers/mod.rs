//! HTTP request handlers.

mod clicks;
mod health;
mod route;
mod stats;

pub use clicks::record_click_handler;
pub use health::health_handler;
pub use route::{create_route_handler, resolve_route_handler};
pub use stats::stats_handler;
