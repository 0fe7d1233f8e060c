//! Site configuration loaded from `.env` / environment.
//!
//! The admin PIN and AI credential were compile-time constants in earlier
//! revisions; both now come from the environment, resolved once at process
//! start. The PIN is mandatory — the gateway refuses to serve without it.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | FOLIO_ADMIN_PIN | (required) | Static PIN for the admin session gate. |
//! | FOLIO_BIND_ADDR | 0.0.0.0 | Gateway bind address. |
//! | FOLIO_PORT | 8090 | Gateway port. |
//! | FOLIO_DATA_PATH | ./data/folio_content | Sled database path. |
//! | FOLIO_SITE_DIR | ./site | Static front-end directory. |
//! | FOLIO_AI_MODE | mock | "mock" \| "live" assistant bridge mode. |
//! | FOLIO_AI_MODEL | (bridge default) | Generative model name. |
//! | GEMINI_API_KEY | (unset) | Credential for live mode; without it every live ask degrades to the fallback reply. |

const ENV_ADMIN_PIN: &str = "FOLIO_ADMIN_PIN";
const ENV_BIND_ADDR: &str = "FOLIO_BIND_ADDR";
const ENV_PORT: &str = "FOLIO_PORT";
const ENV_DATA_PATH: &str = "FOLIO_DATA_PATH";
const ENV_SITE_DIR: &str = "FOLIO_SITE_DIR";
const ENV_AI_MODE: &str = "FOLIO_AI_MODE";
const ENV_AI_MODEL: &str = "FOLIO_AI_MODEL";
const ENV_AI_API_KEY: &str = "GEMINI_API_KEY";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8090;
const DEFAULT_DATA_PATH: &str = "./data/folio_content";
const DEFAULT_SITE_DIR: &str = "./site";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{ENV_ADMIN_PIN} must be set before serving requests")]
    MissingAdminPin,
    #[error("{ENV_PORT} is not a valid port: {0}")]
    InvalidPort(String),
}

/// Assistant bridge mode: mock (canned reply, no network) or live (remote
/// generative-language API).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiMode {
    #[default]
    Mock,
    Live,
}

impl AiMode {
    fn from_env() -> Self {
        match std::env::var(ENV_AI_MODE).as_deref() {
            Ok("live") => AiMode::Live,
            _ => AiMode::Mock,
        }
    }
}

/// Everything the gateway needs, validated at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub port: u16,
    pub data_path: String,
    pub site_dir: String,
    pub admin_pin: String,
    pub ai_mode: AiMode,
    pub ai_model: Option<String>,
    pub ai_api_key: Option<String>,
}

impl SiteConfig {
    /// Load from environment. Unset optional vars fall back to the defaults
    /// in the module docs; a missing admin PIN is a startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_pin = env_opt_string(ENV_ADMIN_PIN).ok_or(ConfigError::MissingAdminPin)?;
        let port = match std::env::var(ENV_PORT) {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            bind_addr: env_string(ENV_BIND_ADDR, DEFAULT_BIND_ADDR),
            port,
            data_path: env_string(ENV_DATA_PATH, DEFAULT_DATA_PATH),
            site_dir: env_string(ENV_SITE_DIR, DEFAULT_SITE_DIR),
            admin_pin,
            ai_mode: AiMode::from_env(),
            ai_model: env_opt_string(ENV_AI_MODEL),
            ai_api_key: env_opt_string(ENV_AI_API_KEY),
        })
    }
}

fn env_string(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

fn env_opt_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
