//! # お問い合わせ API サーバー
//!
//! Web サイトのお問い合わせフォームを受け付け、通知メールを送る。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│ contact-api  │────▶│ SMTP server  │
//! │ (Web サイト) │     │  port: 3000  │     │ (Gmail 等)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! `.env` ファイルは `cargo run -p crafix-setup` で作成できる。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `EMAIL_BACKEND` | No | `smtp`（デフォルト）または `noop` |
//! | `EMAIL_HOST` | smtp 時 **Yes** | SMTP サーバーのホスト名 |
//! | `EMAIL_PORT` | No | SMTP ポート（デフォルト: `587`、`465` は接続直後から TLS） |
//! | `EMAIL_USER` / `EMAIL_PASS` | No | SMTP 認証情報（両方とも指定） |
//! | `EMAIL_FROM` | **Yes** | 送信元アドレス |
//! | `EMAIL_TO` | **Yes** | 通知の宛先アドレス |
//! | `CORS_ORIGIN` | No | 開発用オリジンに加えて許可するオリジン |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p crafix-contact-api
//!
//! # 送信せずに動作確認
//! EMAIL_BACKEND=noop EMAIL_FROM=a@example.com EMAIL_TO=b@example.com cargo run -p crafix-contact-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use crafix_contact_api::{
    app_builder::{build_app, build_channel, spawn_connectivity_probe},
    config::ContactApiConfig,
    middleware::DEV_ORIGINS,
};
use crafix_domain::clock::SystemClock;
use crafix_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// お問い合わせ API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. 配送チャネルの構築と接続確認（バックグラウンド）
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("contact-api");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ContactApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    let channel = build_channel(&config.email).context("配送チャネルの構築に失敗しました")?;
    spawn_connectivity_probe(Arc::clone(&channel));

    let app = build_app(&config, channel, Arc::new(SystemClock));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("お問い合わせ API サーバーが起動しました: {}", addr);
    tracing::info!("通知メールの宛先: {}", config.email.to);
    tracing::info!(
        "許可オリジン: {}",
        DEV_ORIGINS
            .iter()
            .copied()
            .chain(config.cors_origin.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    );

    axum::serve(listener, app).await?;

    Ok(())
}
