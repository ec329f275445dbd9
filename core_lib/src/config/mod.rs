pub mod settings;

pub use settings::{
    AppConfig, CorsConfig, DatabaseConfig, EmailConfig, IntakeConfig, ServerConfig,
};
