//! # ルートハンドラ
//!
//! `GET /` で API の名前・バージョン・エンドポイント一覧を返す。

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub contact: &'static str,
    pub health:  &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiIndex {
    pub message:   &'static str,
    pub version:   &'static str,
    pub endpoints: Endpoints,
}

pub async fn api_index() -> Json<ApiIndex> {
    Json(ApiIndex {
        message:   "Crafix Media Backend API",
        version:   env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            contact: "/api/contact",
            health:  "/api/health",
        },
    })
}
