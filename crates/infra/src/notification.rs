//! # 配送チャネル
//!
//! 通知メッセージをメール送信サービスに引き渡すインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `DeliveryChannel` trait で送信手段を抽象化し、
//!   ハンドラには構築済みのチャネルを注入する
//! - **2 つの実装**: SMTP（lettre）、Noop（ログ出力のみ）
//! - **環境変数切替**: `EMAIL_BACKEND` でランタイム選択

mod noop;
mod smtp;

use async_trait::async_trait;
use crafix_domain::notification::{DeliveryId, NotificationError, NotificationMessage};
pub use noop::NoopDeliveryChannel;
pub use smtp::{SmtpCredentials, SmtpDeliveryChannel, SmtpSettings};

/// 配送チャネル
///
/// 送信サービスへの接続はチャネル構築時に設定済みであること。
/// タイムアウトはチャネル側の責務とし、呼び出し側では制御しない。
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// 送信サービスに到達できるか確認する
    ///
    /// 起動時に一度だけ呼ばれる。`false` でもプロセスは停止しない。
    async fn verify_connectivity(&self) -> bool;

    /// メッセージを送信し、払い出されたメッセージ識別子を返す
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryId, NotificationError>;
}
