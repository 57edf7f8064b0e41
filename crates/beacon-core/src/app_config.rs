use crate::schools::Coordinates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Fixed URL of the school directory document.
    pub directory_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on a single geolocation request before it resolves to unavailable.
    pub geolocation_timeout_ms: u64,
    pub geolocation_high_accuracy: bool,
    /// Position reported by the fixed position source, if one is configured.
    pub position: Option<Coordinates>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("directory_url", &self.directory_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("geolocation_timeout_ms", &self.geolocation_timeout_ms)
            .field(
                "geolocation_high_accuracy",
                &self.geolocation_high_accuracy,
            )
            .field("position", &self.position.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}
