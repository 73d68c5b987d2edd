use serde::Deserialize;

/// Runtime configuration for the control surface.
///
/// Loaded from a YAML file at startup. Every field has a default so the
/// binary comes up without a config file at all (open firewall, no auth,
/// no remote log sink).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Shared basic-auth credential as `user:pass`. `None` disables auth.
    pub basic_auth: Option<String>,
    /// Remote syslog endpoint (`host:port`). `None` disables forwarding.
    pub syslog_addr: Option<String>,
    /// Firewall allowlist entries. Empty means every peer is allowed.
    /// Entries ending in `.` are prefix matches (`192.168.1.`), anything
    /// else must match the peer IP exactly.
    pub allow_from: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            basic_auth: None,
            syslog_addr: None,
            allow_from: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `LEVIOT_CONFIG`, falling
    /// back to defaults when the variable is unset or the file is absent.
    pub fn load() -> Self {
        match std::env::var("LEVIOT_CONFIG") {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(text) => Self::from_yaml(&text).unwrap_or_else(|e| {
                    tracing::warn!("Invalid config {}: {}, using defaults", path, e);
                    Self::default()
                }),
                Err(e) => {
                    tracing::warn!("Cannot read config {}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
