use serde::{Deserialize, Serialize};

/// A monitored keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupKey {
    #[serde(default)]
    pub keyword: String,

    // no notification when the result count is at or below this
    #[serde(rename = "noticeLowerLimit", default)]
    pub notice_lower_limit: i64,
}
