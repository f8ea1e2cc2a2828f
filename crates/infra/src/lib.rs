//! # Crafix インフラ層
//!
//! 外部システム（メール送信サービス）との接続を担当するインフラストラクチャ層。
//!
//! ## 依存関係
//!
//! ```text
//! apps → infra → domain
//! ```
//!
//! ドメイン層で定義した通知メッセージを受け取り、配送チャネルの
//! 具体的な実装（SMTP / Noop）で送り出す。
//!
//! ## モジュール構成
//!
//! - [`notification`] - 配送チャネル（`DeliveryChannel` trait と実装）
//! - `mock` - テスト用モック（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use crafix_infra::notification::{DeliveryChannel, SmtpDeliveryChannel, SmtpSettings};
//!
//! let channel = SmtpDeliveryChannel::new(&SmtpSettings {
//!     host:        "smtp.gmail.com".to_string(),
//!     port:        587,
//!     credentials: None,
//! })?;
//! let reachable = channel.verify_connectivity().await;
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;
