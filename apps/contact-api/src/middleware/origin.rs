//! # オリジン検証ミドルウェア
//!
//! `Origin` ヘッダーが許可リストにないリクエストを、ハンドラに届く前に拒否する。
//! `Origin` ヘッダーのないリクエスト（curl やサーバー間通信）は常に通す。
//!
//! 許可リストは開発用の2オリジンと、設定値 `CORS_ORIGIN`（任意）からなる。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode, header::ORIGIN},
    middleware::Next,
    response::{IntoResponse, Response},
};
use crafix_shared::{event_log::event, log_business_event};

/// 常に許可する開発用オリジン
pub const DEV_ORIGINS: [&str; 2] = ["http://127.0.0.1:5500", "http://localhost:5500"];

const REJECTION_MESSAGE: &str = "Not allowed by CORS";

/// オリジンの許可リスト
#[derive(Debug, Clone)]
pub struct OriginGuard {
    allowed: Arc<[String]>,
}

impl OriginGuard {
    pub fn new(extra_origin: Option<&str>) -> Self {
        let allowed: Vec<String> = DEV_ORIGINS
            .iter()
            .copied()
            .chain(extra_origin)
            .map(str::to_string)
            .collect();

        Self {
            allowed: allowed.into(),
        }
    }

    /// オリジンが許可されているか
    ///
    /// `None`（ヘッダーなし）は許可する。比較は完全一致。
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        origin.is_none_or(|origin| self.allowed.iter().any(|allowed| allowed == origin))
    }

    /// `CorsLayer` に渡すヘッダー値
    pub fn header_values(&self) -> Vec<HeaderValue> {
        self.allowed
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    }
}

/// オリジン検証ミドルウェア
pub async fn guard_origin(
    State(guard): State<OriginGuard>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // 文字列として読めない Origin は許可リストと一致しない
    let origin = request
        .headers()
        .get(ORIGIN)
        .map(|value| value.to_str().unwrap_or_default());

    if guard.is_allowed(origin) {
        return next.run(request).await;
    }

    log_business_event!(
        event.category = event::category::ACCESS,
        event.action = event::action::ORIGIN_REJECTED,
        event.result = event::result::FAILURE,
        http.origin = origin.unwrap_or_default(),
        http.path = request.uri().path(),
        "許可されていないオリジンからのリクエストを拒否"
    );

    (StatusCode::FORBIDDEN, REJECTION_MESSAGE).into_response()
}
