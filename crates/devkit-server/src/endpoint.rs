/// HTTP endpoint paths served by devkit.
pub mod endpoints {
    pub const DIFF_CHECKER: &str = "/api/tools/diff-checker";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
}

/// Names of the tools this server hosts, as listed by the info endpoint.
pub const TOOLS: &[&str] = &["diff-checker"];

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
