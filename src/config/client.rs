//! HTTP client configuration shared by both providers.

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub connect_timeout_ms: u64,
    /// Browser-like agent; both providers reject the reqwest default
    pub user_agent: &'static str,
}

pub const CLIENT: ClientDefaults = ClientDefaults {
    timeout_ms: 20_000,
    connect_timeout_ms: 5_000,
    user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
};
