use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/savings";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub database: Database,
}

/// Where the ledger lives.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[default]
    Memory,
    Sqlite(String),
    /// Full connection string, passed to the driver as is.
    Url(String),
}

impl Database {
    pub fn connection_url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
            Database::Url(url) => url.clone(),
        }
    }
}

impl Settings {
    /// Loads `config/savings.{toml,yaml,...}` (optional), then `SAVINGS__*`
    /// variables, then the conventional `DATABASE_URL` and `PORT`.
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_PATH).required(false))
            .add_source(Environment::with_prefix("SAVINGS").separator("__"));
        let mut settings = Self::from_builder(builder)?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            settings.server.database = Database::Url(url);
        }
        if let Ok(port) = std::env::var("PORT") {
            settings.server.port = port
                .parse()
                .map_err(|_| ConfigError::Message(format!("invalid PORT: {port}")))?;
        }

        Ok(settings)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("app.level", "info")?
            .set_default("server.port", 5000)?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Settings::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
            .unwrap()
    }

    #[test]
    fn defaults_serve_memory_store_on_5000() {
        let settings = from_toml("");
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.server.bind, None);
        assert_eq!(settings.server.database, Database::Memory);
    }

    #[test]
    fn sqlite_path_becomes_rwc_url() {
        let settings = from_toml(
            r#"
            [app]
            level = "debug"

            [server]
            bind = "0.0.0.0"
            port = 8080
            database = { sqlite = "data/savings.db" }
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind.as_deref(), Some("0.0.0.0"));
        assert_eq!(
            settings.server.database.connection_url(),
            "sqlite:data/savings.db?mode=rwc"
        );
    }

    #[test]
    fn url_is_passed_through() {
        let settings = from_toml(
            r#"
            [server]
            database = { url = "sqlite:/tmp/x.db" }
            "#,
        );
        assert_eq!(settings.server.database.connection_url(), "sqlite:/tmp/x.db");
        assert_eq!(Database::Memory.connection_url(), "sqlite::memory:");
    }
}
