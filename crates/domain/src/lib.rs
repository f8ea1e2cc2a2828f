//! # Crafix ドメイン層
//!
//! お問い合わせフォームの送信内容と、そこから作られる通知メールの
//! ドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! apps → infra → domain
//!   ↘      ↓
//!     shared
//! ```
//!
//! ドメイン層はインフラ層（SMTP、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`contact`] - お問い合わせ内容（入力フォームと検証済みの送信内容）
//! - [`notification`] - 通知メッセージと配送結果
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層エラー
//!
//! ## 使用例
//!
//! ```rust
//! use crafix_domain::{
//!     DomainError,
//!     contact::{ContactForm, ContactSubmission},
//! };
//!
//! let form = ContactForm::from_pairs([("name", "Ada"), ("email", "ada@example.com")]);
//! let result = ContactSubmission::new(form);
//!
//! assert!(matches!(result, Err(DomainError::MissingRequiredFields { .. })));
//! ```

pub mod clock;
pub mod contact;
pub mod error;
pub mod notification;

pub use error::DomainError;
