use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::validation::validate_email;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub cors: CorsConfig,
    pub intake: IntakeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

/// An empty `url` selects the in-memory record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub sender: String,
    pub recipient: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    pub list_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8001,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:./leads.db?mode=rwc".to_string(),
            name: "timberguard".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://api.resend.com".to_string(),
            sender: "onboarding@resend.dev".to_string(),
            recipient: String::new(),
            timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self { list_limit: 1000 }
    }
}

impl EmailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.recipient.trim().is_empty()
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl AppConfig {
    /// Defaults, then `config.toml` if present, then `APP_*` environment
    /// variables (`APP_EMAIL__API_KEY`, `APP_SERVER__PORT`, ...).
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.database.name.trim().is_empty() {
            return Err(ConfigError::Message(
                "Database name cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Message(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.email.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Email timeout must be greater than 0".to_string(),
            ));
        }

        // The email attempt runs inside the request; it has to give up before
        // the request timeout, leaving room for the store write.
        if self.email.timeout_seconds >= self.server.request_timeout_seconds {
            return Err(ConfigError::Message(format!(
                "Email timeout ({}s) must be shorter than the request timeout ({}s)",
                self.email.timeout_seconds, self.server.request_timeout_seconds
            )));
        }

        if validate_email(&self.email.sender).is_err() {
            return Err(ConfigError::Message(format!(
                "Email sender '{}' is not a valid address",
                self.email.sender
            )));
        }

        if !self.email.recipient.trim().is_empty() && validate_email(&self.email.recipient).is_err() {
            return Err(ConfigError::Message(format!(
                "Email recipient '{}' is not a valid address",
                self.email.recipient
            )));
        }

        if self.intake.list_limit == 0 {
            return Err(ConfigError::Message(
                "Intake list limit must be greater than 0".to_string(),
            ));
        }

        if self.database.url.trim().is_empty() {
            tracing::warn!("No database URL configured - leads will only be kept in memory");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.database.url, "sqlite:./leads.db?mode=rwc");
        assert_eq!(config.database.name, "timberguard");
        assert_eq!(config.email.sender, "onboarding@resend.dev");
        assert_eq!(config.email.timeout(), Duration::from_secs(10));
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.intake.list_limit, 1000);
        assert!(!config.email.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.server.request_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.server.request_timeout_seconds = 1;
        config.email.timeout_seconds = 10;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.email.timeout_seconds = config.server.request_timeout_seconds;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.server.request_timeout_seconds = 5;
        config.email.timeout_seconds = 4;
        assert!(config.validate().is_ok());

        config = AppConfig::default();
        config.database.name = "  ".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.email.timeout_seconds = 0;
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.email.sender = "not-an-address".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.email.recipient = "owner@".to_string();
        assert!(config.validate().is_err());

        config = AppConfig::default();
        config.intake.list_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_database_url_is_allowed() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_email_configured_requires_key_and_recipient() {
        let mut email = EmailConfig::default();
        email.api_key = "re_123".to_string();
        assert!(!email.is_configured());

        email.recipient = "owner@example.com".to_string();
        assert!(email.is_configured());
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8001");

        let mut config = AppConfig::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_config_loading() {
        let config = AppConfig::load().expect("Should load configuration");

        assert!(config.validate().is_ok());
        assert!(!config.server.host.is_empty());
        assert!(config.server.port > 0);
        assert!(config.intake.list_limit > 0);
    }
}
