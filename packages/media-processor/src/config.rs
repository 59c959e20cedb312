use std::net::SocketAddr;
use std::time::Duration;

use media_core::S3Settings;

pub const DEFAULT_REGION: &str = "eu-west-1";
pub const DEFAULT_BUCKET: &str = "cdn.nicholasgriffin.dev";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 起動方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// 常駐 HTTP サーバー
    Server,
    /// 1 呼び出し 1 リクエストの関数実行環境
    Lambda,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// 環境変数から読み込む設定
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: S3Settings,
    pub fetch_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
    pub transport: Transport,
    pub log_format: LogFormat,
}

impl Config {
    /// プロセスの環境変数から Config を作成する
    ///
    /// 認証情報が未設定でも起動は失敗させない（空の認証情報で S3 にアクセスする）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let storage = S3Settings {
            bucket: var("CDN_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            region: var("CDN_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: var("CDN_ACCESS_KEY_ID").unwrap_or_default(),
            secret_access_key: var("CDN_SECRET_ACCESS_KEY").unwrap_or_default(),
            endpoint: var("CDN_ENDPOINT"),
        };

        let fetch_timeout = match var("FETCH_TIMEOUT_MS") {
            Some(raw) => Some(Duration::from_millis(raw.parse().map_err(|_| {
                ConfigError::Invalid {
                    name: "FETCH_TIMEOUT_MS",
                    value: raw.clone(),
                }
            })?)),
            None => None,
        };

        let raw_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let transport = match var("TRANSPORT").as_deref() {
            Some("server") => Transport::Server,
            Some("lambda") => Transport::Lambda,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "TRANSPORT",
                    value: other.to_string(),
                });
            }
            None if var("AWS_LAMBDA_RUNTIME_API").is_some() => Transport::Lambda,
            None => Transport::Server,
        };

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            storage,
            fetch_timeout,
            bind_addr,
            transport,
            log_format,
        })
    }
}
