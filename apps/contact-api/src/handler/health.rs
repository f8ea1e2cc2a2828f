//! # ヘルスチェックハンドラ
//!
//! `GET /api/health` はプロセスが応答できることだけを返す（配送チャネルは確認しない）。
//!
//! レスポンス型は [`crafix_shared::HealthResponse`] を参照。

use axum::Json;
use chrono::Utc;
use crafix_shared::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::running(Utc::now()))
}
