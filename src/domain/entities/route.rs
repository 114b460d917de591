//! Route entity: a short key mapped to its target URL.

use serde::{Deserialize, Serialize};

/// A key-to-target mapping held in the key-value store.
///
/// The key is a short, URL-safe, case-sensitive identifier that is unique
/// across the key-value namespace. Once created, the target is immutable:
/// no update operation is exposed anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub key: String,
    pub target: String,
}

impl Route {
    pub fn new(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: target.into(),
        }
    }
}

/// Computed view joining a route with its click count.
///
/// Produced on demand by the stats service; never persisted and has no
/// lifecycle beyond the request that computed it.
#[derive(Debug, Clone, Serialize)]
pub struct RouteStats {
    pub key: String,
    pub target: String,
    pub clicks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_serializes_key_and_target() {
        let route = Route::new("4ba29b9f9e", "https://example.com");
        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["key"], "4ba29b9f9e");
        assert_eq!(json["target"], "https://example.com");
    }

    #[test]
    fn test_route_roundtrip() {
        let route = Route::new("abc123def0", "https://example.com/path?q=1");
        let parsed: Route = serde_json::from_str(&serde_json::to_string(&route).unwrap()).unwrap();
        assert_eq!(parsed, route);
    }
}
