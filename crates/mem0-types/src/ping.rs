use serde::{Deserialize, Serialize};

/// Connectivity check response; `status` is `"ok"` for a valid key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

impl PingResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
