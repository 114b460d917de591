//! DTOs for route creation and resolution.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Route;

/// Request to create a new route.
///
/// The target is an opaque string; this service deliberately performs no
/// URL validation beyond requiring the field to be present and non-empty.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(min = 1, message = "target must not be empty"))]
    pub target: String,
}

/// A route as served over the wire.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub key: String,
    pub target: String,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            key: route.key,
            target: route.target,
        }
    }
}
