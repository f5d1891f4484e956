/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, JWT_SHARED_SECRET)
 * - 起動時に一度だけ読み、以降は Config を明示的に渡す (global state にしない)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::services::auth::{
    Secret, resolve_secret,
    secret::{JWT_TEST_SECRET, TEST_ENV_NAME},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Test,
    Production,
}

impl AppEnv {
    pub fn from_name(name: &str) -> Self {
        match name {
            TEST_ENV_NAME => Self::Test,
            _ => match name.to_ascii_lowercase().as_str() {
                "production" | "prod" => Self::Production,
                _ => Self::Development,
            },
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    // test では JWT_SHARED_SECRET を無視してテスト用 secret を使う
    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    // APP_ENV の生の値。secret 解決はこの値で判定する (大文字小文字を区別)
    pub app_env_name: String,
    pub app_env: AppEnv,

    pub jwt_secret: Secret,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = match std::env::var("PORT") {
            Ok(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        if app_env_name.trim().is_empty() {
            return Err(ConfigError::Missing("APP_ENV"));
        }
        let app_env = AppEnv::from_name(&app_env_name);

        // 未設定でも起動は失敗させない (テスト用 secret にフォールバック)
        let jwt_secret = resolve_secret(&app_env_name);

        Ok(Self {
            addr,
            app_env_name,
            app_env,
            jwt_secret,
        })
    }

    /// 固定のテスト用 secret で動いているか (未設定 / 空 / APP_ENV=test)
    pub fn uses_test_secret(&self) -> bool {
        self.jwt_secret == Secret::new(JWT_TEST_SECRET)
    }
}
