//! # 通知
//!
//! お問い合わせ内容から組み立てる通知メッセージと、その配送結果を表す。
//!
//! 配送チャネル（SMTP 等）の実装はインフラ層に置き、
//! ここでは配送に渡す値と配送の結果だけを定義する。

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// 通知メッセージ
///
/// 送信者・宛先は設定値から、件名・本文はお問い合わせ内容から作られる。
/// `sent_at` は本文に載る「送信日時」と同じ時刻。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub sender:    String,
    pub recipient: String,
    pub subject:   String,
    pub html_body: String,
    pub sent_at:   DateTime<Utc>,
}

/// 配送チャネルが払い出したメッセージ識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeliveryId(String);

impl DeliveryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DeliveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 通知の配送で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// メッセージの組み立てに失敗（アドレス形式不正など）
    #[error("メッセージの組み立てに失敗: {0}")]
    Build(String),

    /// 配送チャネルへの接続に失敗
    #[error("配送チャネルへの接続に失敗: {0}")]
    Connection(String),

    /// 配送チャネルが送信を拒否した、または送信中に失敗した
    #[error("送信に失敗: {0}")]
    SendFailed(String),
}

/// 配送結果
///
/// 配送の失敗は API 層で 500 に変換される。再送はしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    /// 配送チャネルが受け付けた
    Delivered(DeliveryId),
    /// 配送に失敗した（`error_detail` は運用者向けのログにのみ出す）
    Failed { error_detail: String },
}

impl From<Result<DeliveryId, NotificationError>> for DeliveryResult {
    fn from(result: Result<DeliveryId, NotificationError>) -> Self {
        match result {
            Ok(id) => Self::Delivered(id),
            Err(e) => Self::Failed {
                error_detail: e.to_string(),
            },
        }
    }
}
