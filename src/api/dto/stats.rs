//! DTOs for the statistics endpoint.

use serde::Serialize;

use crate::domain::entities::RouteStats;

/// Statistics for one route: the mapping joined with its click count.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub key: String,
    pub target: String,
    pub clicks: i64,
}

impl From<RouteStats> for StatsResponse {
    fn from(stats: RouteStats) -> Self {
        Self {
            key: stats.key,
            target: stats.target,
            clicks: stats.clicks,
        }
    }
}
