//! DTOs for click recording.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{ClickEvent, UserAgentInfo};

/// A click reported by the edge service after it completed a redirect.
///
/// `time` is optional on the wire; when the edge omits it, the event is
/// stamped with the service clock at acceptance.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordClickRequest {
    #[validate(length(min = 1, message = "key must not be empty"))]
    pub key: String,

    #[serde(default)]
    pub time: Option<DateTime<Utc>>,

    #[serde(default, rename = "ip")]
    pub client_ip: Option<String>,

    #[serde(default)]
    pub referer: Option<String>,

    #[serde(default)]
    pub user_agent: UserAgentInfo,
}

impl From<RecordClickRequest> for ClickEvent {
    fn from(req: RecordClickRequest) -> Self {
        ClickEvent {
            key: req.key,
            time: req.time.unwrap_or_else(Utc::now),
            client_ip: req.client_ip,
            referer: req.referer,
            user_agent: req.user_agent,
        }
    }
}
