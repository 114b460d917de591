//! Core business entities.

mod click;
mod route;

pub use click::{ClickEvent, UserAgentInfo};
pub use route::{Route, RouteStats};
