//! # Crafix 共有ユーティリティ
//!
//! Crafix バックエンド全体（API サーバー、クライアント、セットアップツール）で
//! 使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, client, apps）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - HTTP / tracing 関連は `observability` feature の背後に置き、
//!   クライアントなど軽量な利用側に余計な依存を持ち込まない

pub mod api_response;
#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod event_log;
pub mod health;
pub mod observability;

pub use api_response::ApiResponse;
pub use health::HealthResponse;
