//! # お問い合わせ API 設定
//!
//! 環境変数からサーバーとメール配送の設定を読み込む。
//!
//! 読み込みは値の取得関数を受け取る [`ContactApiConfig::from_lookup`] で行い、
//! テストではプロセスの環境変数に触れずに検証する。

use crafix_infra::notification::{SmtpCredentials, SmtpSettings};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_EMAIL_PORT: u16 = 587;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません（crafix-setup で .env を作成してください）")]
    Missing(&'static str),

    #[error("{name} の値が不正です: {value:?}（{reason}）")]
    Invalid {
        name:   &'static str,
        value:  String,
        reason: &'static str,
    },

    #[error("EMAIL_USER と EMAIL_PASS は両方とも設定する必要があります")]
    IncompleteCredentials,
}

/// メール配送の方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBackend {
    Smtp(SmtpSettings),
    /// 送信せずログ出力のみ
    Noop,
}

/// メール配送の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub backend: EmailBackend,
    /// 送信元アドレス（固定）
    pub from:    String,
    /// 宛先アドレス（固定）
    pub to:      String,
}

/// お問い合わせ API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactApiConfig {
    /// バインドアドレス
    pub host:        String,
    /// ポート番号
    pub port:        u16,
    pub email:       EmailConfig,
    /// 開発用オリジンに加えて許可するオリジン
    pub cors_origin: Option<String>,
}

impl ContactApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 値の取得関数から設定を読み込む
    ///
    /// 空文字や空白のみの値は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let port = match get("PORT") {
            Some(value) => parse_port("PORT", value)?,
            None => DEFAULT_PORT,
        };

        let backend = match get("EMAIL_BACKEND").as_deref() {
            None | Some("smtp") => EmailBackend::Smtp(SmtpSettings {
                host:        require("EMAIL_HOST")?,
                port:        match get("EMAIL_PORT") {
                    Some(value) => parse_port("EMAIL_PORT", value)?,
                    None => DEFAULT_EMAIL_PORT,
                },
                credentials: match (get("EMAIL_USER"), get("EMAIL_PASS")) {
                    (Some(user), Some(password)) => Some(SmtpCredentials { user, password }),
                    (None, None) => None,
                    _ => return Err(ConfigError::IncompleteCredentials),
                },
            }),
            Some("noop") => EmailBackend::Noop,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name:   "EMAIL_BACKEND",
                    value:  other.to_string(),
                    reason: "smtp または noop を指定してください",
                });
            }
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            email: EmailConfig {
                backend,
                from: require("EMAIL_FROM")?,
                to: require("EMAIL_TO")?,
            },
            cors_origin: get("CORS_ORIGIN"),
        })
    }
}

fn parse_port(name: &'static str, value: String) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::Invalid {
            name,
            value,
            reason: "1〜65535 のポート番号を指定してください",
        }),
    }
}
