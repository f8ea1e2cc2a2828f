//! # お問い合わせ API クライアント
//!
//! ブラウザ側から `POST /api/contact` を呼び出す。
//!
//! ## エンドポイント
//!
//! ページのホスト名で送信先を切り替える。
//!
//! | ホスト名 | 送信先 |
//! |---------|--------|
//! | `localhost` / `127.0.0.1` | `http://127.0.0.1:3000/api/contact` |
//! | それ以外 | `https://crafix-media.vercel.app/api/contact` |

use async_trait::async_trait;
use crafix_shared::ApiResponse;
use serde::Serialize;
use thiserror::Error;

const LOCAL_ENDPOINT: &str = "http://127.0.0.1:3000/api/contact";
const PRODUCTION_ENDPOINT: &str = "https://crafix-media.vercel.app/api/contact";

/// 送信先 URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(String);

impl ApiEndpoint {
    /// ページのホスト名から送信先を決める
    pub fn for_hostname(hostname: &str) -> Self {
        match hostname {
            "localhost" | "127.0.0.1" => Self(LOCAL_ENDPOINT.to_string()),
            _ => Self(PRODUCTION_ENDPOINT.to_string()),
        }
    }

    /// 任意の URL を送信先にする
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// API クライアントエラー
///
/// いずれもサーバーからの応答を解釈できなかったことを表し、
/// 画面上はネットワークエラーとして扱われる。
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// 応答を受け取れなかった
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 応答本文を JSON として読めなかった
    #[error("応答の解釈に失敗: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// フォームの入力値
///
/// 未入力の項目も空文字のまま送る（空の任意項目はサーバー側で未入力扱いになる）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name:    String,
    pub email:   String,
    pub company: String,
    pub project: String,
    pub budget:  String,
    pub message: String,
}

/// お問い合わせ API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// フォームを送信し、サーバーの応答本文を返す
    ///
    /// 400 / 500 でも本文が読めれば `Ok` を返す（成否は `success` で判断する）。
    async fn submit(&self, form: &ContactFormData) -> Result<ApiResponse, ClientError>;
}

/// reqwest による実装
pub struct HttpContactApi {
    endpoint: ApiEndpoint,
    client:   reqwest::Client,
}

impl HttpContactApi {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn submit(&self, form: &ContactFormData) -> Result<ApiResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<ApiResponse>().await?;
        tracing::debug!(status = %status, success = body.success, "お問い合わせ API 応答");

        Ok(body)
    }
}
