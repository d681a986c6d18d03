use std::{env, path::Path, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Client configuration.
///
/// The token is fixed at construction; everything else has a default that
/// leaves the transport's own behaviour untouched.
#[derive(Clone)]
pub struct Config {
    bot_token: String,
    pub api_base_url: String,
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Config {
    pub fn new(bot_token: impl Into<String>) -> Result<Self> {
        let bot_token = bot_token.into();
        if bot_token.trim().is_empty() {
            return Err(Error::Config("bot token must not be empty".to_string()));
        }
        Ok(Self {
            bot_token,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            connect_timeout: None,
        })
    }

    /// Load from the environment (after `.env`, which never overrides
    /// variables that are already set).
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"))?;

        let token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let mut cfg = Self::new(token)?;
        if let Some(base) = env_str("TELEGRAM_API_BASE_URL").and_then(non_empty) {
            cfg.api_base_url = base;
        }
        cfg.request_timeout = env_millis("TELEGRAM_REQUEST_TIMEOUT_MS")?;
        cfg.connect_timeout = env_millis("TELEGRAM_CONNECT_TIMEOUT_MS")?;
        Ok(cfg)
    }

    pub fn with_api_base_url(mut self, base: impl Into<String>) -> Self {
        self.api_base_url = base.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    /// `<base>/bot<token>`; method names are appended as `/<method>`.
    pub fn api_url(&self) -> String {
        format!("{}/bot{}", self.base(), self.bot_token)
    }

    /// `<base>/file/bot<token>`; file paths from `getFile` are appended.
    pub fn file_url(&self) -> String {
        format!("{}/file/bot{}", self.base(), self.bot_token)
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Mask a token for logs: first 7 chars + `***` + last 4. Tokens of 11 chars
/// or fewer become `***`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}***{tail}")
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_millis(key: &str) -> Result<Option<Duration>> {
    let Some(raw) = env_str(key).and_then(non_empty) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|e| Error::Config(format!("{key}: invalid milliseconds {raw:?}: {e}")))
}

/// Load `path` into the environment without overriding variables that are
/// already set. A missing file is fine; an unreadable or malformed one is not.
fn load_dotenv_if_present(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!("{}: {e}", path.display()))),
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
