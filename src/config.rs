// Runtime settings, read from the environment on top of local defaults.
//
// Notes
// - The binary loads a `.env` file through dotenvy before calling `load_settings`.
// - Without a remote URL the service runs against the in-memory remote client.
// - An empty admin password keeps deletions closed.

use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub remote_url: Option<String>,
    pub remote_api_key: String,
    pub admin_password: String,
    pub use_in_memory_remote: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            remote_url: None,
            remote_api_key: String::new(),
            admin_password: String::new(),
            use_in_memory_remote: true,
        }
    }
}

impl Settings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid bind address {:?}: {e}", self.bind_addr))
    }
}

pub fn load_settings() -> Settings {
    settings_from(|key| std::env::var(key).ok())
}

/// Builds settings from any key lookup. Later keys in each list win.
pub fn settings_from(lookup: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();
    let read = |keys: &[&str]| {
        keys.iter()
            .filter_map(|key| lookup(key))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .last()
    };

    if let Some(v) = read(&["COMMITMENTS_BIND_ADDR"]) {
        settings.bind_addr = v;
    }
    if let Some(v) = read(&["SUPABASE_URL", "COMMITMENTS_REMOTE_URL"]) {
        settings.remote_url = Some(v);
        settings.use_in_memory_remote = false;
    }
    if let Some(v) = read(&["SUPABASE_ANON_KEY", "COMMITMENTS_REMOTE_API_KEY"]) {
        settings.remote_api_key = v;
    }
    if let Some(v) = read(&["COMMITMENTS_ADMIN_PASSWORD"]) {
        settings.admin_password = v;
    }

    settings
}
