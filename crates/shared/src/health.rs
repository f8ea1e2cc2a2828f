//! # ヘルスチェック共通型
//!
//! `/api/health` が返すレスポンス型。稼働確認用のため依存サービス
//! （メール送信チャネル）の状態は含めない。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ## 使用例
///
/// ```
/// use chrono::Utc;
/// use crafix_shared::HealthResponse;
///
/// let response = HealthResponse::running(Utc::now());
/// assert!(response.success);
/// assert_eq!(response.message, "Server is running");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success:   bool,
    pub message:   String,
    /// 応答時刻（RFC 3339 / ISO 8601）
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// サーバー稼働中のレスポンスを作成する
    pub fn running(timestamp: DateTime<Utc>) -> Self {
        Self {
            success: true,
            message: "Server is running".to_string(),
            timestamp,
        }
    }
}
