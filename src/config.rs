use crate::errors::{IncapApiError, IncapResult};
use std::{env, fmt};
use url::Url;

/// Incapsula API默认地址
pub const REST_BASE_URL: &str = "https://my.incapsula.com/api/prov/v1";

pub const ENV_API_ID: &str = "INCAPSULA_API_ID";
pub const ENV_API_KEY: &str = "INCAPSULA_API_KEY";
pub const ENV_BASE_URL: &str = "INCAPSULA_BASE_URL";

/// 连接Incapsula API所需的配置
#[derive(Clone)]
pub struct Config {
    pub api_id: String,
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    ///```rust
    ///let config = Config::new("12345", "abcdefhijklmnopqrstuvwxyz");
    ///```
    pub fn new(api_id: &str, api_key: &str) -> Self {
        Self {
            api_id: api_id.to_string(),
            api_key: api_key.to_string(),
            base_url: REST_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// 从环境变量读取配置，INCAPSULA_BASE_URL可选
    pub fn from_env() -> IncapResult<Self> {
        let api_id = required_env(ENV_API_ID)?;
        let api_key = required_env(ENV_API_KEY)?;
        let config = Self::new(&api_id, &api_key);
        match env::var(ENV_BASE_URL) {
            Ok(url) if !url.trim().is_empty() => Ok(config.with_base_url(url.trim())),
            _ => Ok(config),
        }
    }

    /// 解析base_url，并保证以`/`结尾，这样`join("subaccounts/add")`得到的是`<base>/subaccounts/add`
    pub(crate) fn base_url(&self) -> IncapResult<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(Url::parse(&raw)?)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_id", &self.api_id)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn required_env(key: &str) -> IncapResult<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(IncapApiError::ConfigError(format!(
            "environment variable {} is not set",
            key
        ))),
    }
}
