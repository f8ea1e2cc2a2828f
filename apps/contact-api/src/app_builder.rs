//! # アプリケーション構築
//!
//! 配送チャネル・ユースケース・State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, header::CONTENT_TYPE},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use crafix_domain::{clock::Clock, notification::NotificationError};
use crafix_infra::notification::{DeliveryChannel, NoopDeliveryChannel, SmtpDeliveryChannel};
use crafix_shared::{
    canonical_log::CanonicalLogLineLayer,
    event_log::error,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tokio::task::JoinHandle;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    config::{ContactApiConfig, EmailBackend, EmailConfig},
    handler::{ContactState, api_index, health_check, submit_contact},
    middleware::{OriginGuard, guard_origin},
    usecase::{ContactUseCaseImpl, MessageComposer},
};

/// 設定に応じた配送チャネルを作る
///
/// # Errors
///
/// SMTP の TLS 設定を組み立てられない場合。
pub fn build_channel(config: &EmailConfig) -> Result<Arc<dyn DeliveryChannel>, NotificationError> {
    let channel: Arc<dyn DeliveryChannel> = match &config.backend {
        EmailBackend::Smtp(settings) => Arc::new(SmtpDeliveryChannel::new(settings)?),
        EmailBackend::Noop => Arc::new(NoopDeliveryChannel),
    };
    Ok(channel)
}

/// 配送チャネルへの接続確認をバックグラウンドで1回だけ行う
///
/// 結果はログに出すのみで、失敗してもリクエストの受け付けは止めない。
pub fn spawn_connectivity_probe(channel: Arc<dyn DeliveryChannel>) -> JoinHandle<bool> {
    tokio::spawn(async move {
        let reachable = channel.verify_connectivity().await;
        if reachable {
            tracing::info!("メールサーバーに接続できました。送信を受け付けます");
        } else {
            tracing::error!(
                error.category = error::category::EXTERNAL_SERVICE,
                error.kind = error::kind::MAIL_CONNECTIVITY,
                "メールサーバーに接続できません。接続が回復するまで送信は失敗します"
            );
        }
        reachable
    })
}

/// State の構築とルーター定義を行う
pub fn build_app(
    config: &ContactApiConfig,
    channel: Arc<dyn DeliveryChannel>,
    clock: Arc<dyn Clock>,
) -> Router {
    let composer = MessageComposer::new(&config.email.from, &config.email.to);
    let contact_state = Arc::new(ContactState {
        usecase: ContactUseCaseImpl::new(channel, composer, clock),
    });

    let origin_guard = OriginGuard::new(config.cors_origin.as_deref());
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origin_guard.header_values()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 の Request ID を付与
    // 2. TraceLayer: request_id 入りのスパンを張る
    // 3. PropagateRequestIdLayer: レスポンスに X-Request-Id をコピー
    // 4. CanonicalLogLineLayer: リクエストごとのサマリログ
    // 5. guard_origin: 許可されていないオリジンを拒否
    // 6. CorsLayer: 許可済みオリジンへの CORS ヘッダー付与とプリフライト応答
    Router::new()
        .route("/", get(api_index))
        .route("/api/health", get(health_check))
        .merge(
            Router::new()
                .route("/api/contact", post(submit_contact))
                .with_state(contact_state),
        )
        .layer(cors)
        .layer(from_fn_with_state(origin_guard, guard_origin))
        .layer(CanonicalLogLineLayer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
