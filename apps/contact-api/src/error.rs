//! # お問い合わせ API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! | エラー種別 | HTTP ステータス | 利用者に返す文言 |
//! |-----------|----------------|-----------------|
//! | `MalformedRequest` | 400 | リクエストボディ不正 |
//! | `Validation` | 400 | 必須項目の案内 |
//! | `DeliveryFailure` | 500 | 汎用のお詫び（詳細はログのみ） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crafix_domain::DomainError;
use crafix_shared::ApiResponse;
use thiserror::Error;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required";
pub const DELIVERY_FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again later.";

/// お問い合わせ API のエラー
#[derive(Debug, Error)]
pub enum ContactApiError {
    /// リクエストボディを解釈できない
    #[error("リクエストボディを解釈できません")]
    MalformedRequest,

    /// 必須項目が欠けている
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// メール配送に失敗した（詳細は運用者向け）
    #[error("メール配送に失敗: {0}")]
    DeliveryFailure(String),
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ContactApiError::MalformedRequest => (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE),
            ContactApiError::Validation(_) => (StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE),
            ContactApiError::DeliveryFailure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, DELIVERY_FAILURE_MESSAGE)
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
