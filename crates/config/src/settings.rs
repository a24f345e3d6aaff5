use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    /// Directory holding the built UI, served for any path the API does not match.
    pub static_dir: Option<String>,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub max_pool_size: Option<u32>,
    pub min_pool_size: Option<u32>,
}

impl Settings {
    /// Loads settings from `config/default`, `config/local`, `EVENTHUB__*`
    /// variables and finally the plain `MONGO_URI` / `PORT` variables older
    /// deployments were configured with.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(std::env::var("MONGO_URI").ok(), std::env::var("PORT").ok())
    }

    pub fn load_with(
        mongo_uri: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("EVENTHUB")
                    .list_separator(",")
                    .with_list_parse_key("app.cors_origins")
                    .try_parsing(true),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 5001)?
            .set_default("app.static_dir", None::<String>)?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "eventhub")?
            .set_default("database.max_pool_size", None::<u32>)?
            .set_default("database.min_pool_size", None::<u32>)?
            .set_override_option("database.url", mongo_uri)?
            .set_override_option("app.port", port)?
            .build()?;

        config.try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}
