use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| panic!("FATAL: invalid configuration: {e}"))
});

/// Environment variables recognised as configuration overrides.
const ENV_KEYS: &[&str] = &[
    "loglevel",
    "database_url",
    "listen_addr",
    "backend_url",
    "sentiment_analyzer_url",
    "cookie_secret",
    "proxy",
    "connect_timeout_secs",
    "request_timeout_secs",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub loglevel: String,
    pub database_url: String,
    pub listen_addr: String,
    /// Base URL of the dealer/review data service.
    pub backend_url: Url,
    /// Base URL of the sentiment analysis service.
    pub sentiment_analyzer_url: Url,
    /// Master secret for the private session cookie. At least 64 bytes;
    /// when absent a random key is generated and sessions do not survive restarts.
    pub cookie_secret: Option<String>,
    pub proxy: Option<Url>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            database_url: "sqlite:dealership.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            backend_url: Url::parse("http://localhost:3030").expect("static url"),
            sentiment_analyzer_url: Url::parse("http://localhost:5050").expect("static url"),
            cookie_secret: None,
            proxy: None,
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then environment variables.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::raw().only(ENV_KEYS))
    }
}
