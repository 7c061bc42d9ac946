//! Client configuration: where the tracking server's API lives.
//!
//! The default is same-origin with absolute `/api/...` paths. A non-empty
//! base lets the dashboard run behind a path prefix (e.g. a reverse proxy
//! ingress such as `/api/hassio_ingress/<token>`).

/// Dashboard client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL or path prefix prepended to every endpoint path.
    pub api_base: String,
}

impl ClientConfig {
    /// Build a configuration from an optional base (blank means same origin).
    #[must_use]
    pub fn new(api_base: Option<&str>) -> Self {
        Self {
            api_base: api_base.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    /// Join the API base and an absolute endpoint path with exactly one `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
