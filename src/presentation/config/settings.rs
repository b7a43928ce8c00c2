use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub translation: TranslationSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// When absent the server runs on the in-memory store.
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    /// When empty the mock pass-through engine is used.
    pub api_key: String,
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub processing_delay_ms: u64,
    pub translation_timeout_secs: u64,
}

impl Settings {
    /// Build settings from environment variables, falling back to local
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            database: DatabaseSettings {
                url: std::env::var("DATABASE_URL").ok(),
                max_connections: env_parsed("DATABASE_MAX_CONNECTIONS", 5),
            },
            translation: TranslationSettings {
                api_key: env_or("DEEPL_API_KEY", ""),
                api_url: env_or(
                    "DEEPL_API_URL",
                    crate::infrastructure::translation::DEEPL_API_URL,
                ),
            },
            pipeline: PipelineSettings {
                processing_delay_ms: env_parsed("PIPELINE_PROCESSING_DELAY_MS", 3000),
                translation_timeout_secs: env_parsed("PIPELINE_TRANSLATION_TIMEOUT_SECS", 30),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
