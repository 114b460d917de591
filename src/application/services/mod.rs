//! Application services orchestrating domain logic over the stores.

mod click_service;
mod key_generator;
mod route_resolver;
mod stats_service;

pub use click_service::ClickService;
pub use key_generator::{KEY_LENGTH, KeyGenerator};
pub use route_resolver::RouteResolver;
pub use stats_service::StatsService;
