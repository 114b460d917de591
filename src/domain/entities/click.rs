//! Click event entity: one record per successful redirect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded instance of a client being redirected through a route.
///
/// Append-only and immutable once written. The edge service that performed
/// the redirect supplies the client metadata; this service never parses
/// user agents itself, it only carries the derived fields.
///
/// JSON field names follow the wire contract consumed by the edge service
/// (`ip` for the client address, nested `user_agent` object).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickEvent {
    pub key: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "ip", default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    #[serde(default)]
    pub user_agent: UserAgentInfo,
}

impl ClickEvent {
    /// Creates a click event stamped with the current time.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            time: Utc::now(),
            client_ip: None,
            referer: None,
            user_agent: UserAgentInfo::default(),
        }
    }
}

/// Descriptive user-agent fields attached to a click event at creation time.
///
/// No independent identity or lifecycle; exists only nested inside a click.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserAgentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_version: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub mobile: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_event_new_defaults() {
        let event = ClickEvent::new("abc123def0");

        assert_eq!(event.key, "abc123def0");
        assert!(event.client_ip.is_none());
        assert!(event.referer.is_none());
        assert!(!event.user_agent.bot);
    }

    #[test]
    fn test_client_ip_serializes_as_ip() {
        let mut event = ClickEvent::new("abc123def0");
        event.client_ip = Some("203.0.113.7".to_string());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["ip"], "203.0.113.7");
        assert!(json.get("client_ip").is_none());
    }

    #[test]
    fn test_deserialize_edge_payload() {
        let raw = r#"{
            "key": "4ba29b9f9e",
            "time": "2026-08-23T10:15:00Z",
            "ip": "198.51.100.4",
            "referer": "https://news.example.org/",
            "user_agent": {
                "str": "Mozilla/5.0",
                "os": "Linux",
                "browser": "Firefox",
                "browser_version": "142.0",
                "mobile": false
            }
        }"#;

        let event: ClickEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(event.key, "4ba29b9f9e");
        assert_eq!(event.client_ip.as_deref(), Some("198.51.100.4"));
        assert_eq!(event.user_agent.browser.as_deref(), Some("Firefox"));
        assert!(!event.user_agent.bot);
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let event: ClickEvent =
            serde_json::from_str(r#"{"key": "k", "time": "2026-08-23T10:15:00Z"}"#).unwrap();
        assert_eq!(event.key, "k");
        assert!(event.user_agent.str.is_none());
    }
}
