//! # API レスポンスエンベロープ
//!
//! お問い合わせ API の統一レスポンス形式
//! `{ "success": bool, "message": string, "messageId"?: string }` を提供する。

use serde::{Deserialize, Serialize};

/// お問い合わせ API の統一レスポンス型
///
/// この型は以下の場所で使用される:
/// - API サーバーのハンドラ（Serialize でレスポンスを返す）
/// - クライアント（Deserialize でサーバーのレスポンスを受け取る）
///
/// `messageId` は配送成功時のみ含まれる。
///
/// ## 使用例
///
/// ```
/// use crafix_shared::ApiResponse;
///
/// let response = ApiResponse::failure("Invalid request body");
/// assert!(!response.success);
/// assert_eq!(response.message_id, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success:    bool,
    /// サーバーが返した場合のみ非空。クライアント側でフォールバック文言に置き換える
    #[serde(default)]
    pub message:    String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl ApiResponse {
    /// 配送成功レスポンスを作成する
    pub fn delivered(message: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            success:    true,
            message:    message.into(),
            message_id: Some(message_id.into()),
        }
    }

    /// 失敗レスポンスを作成する
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success:    false,
            message:    message.into(),
            message_id: None,
        }
    }
}
