//! # テスト用モック配送チャネル
//!
//! ユースケース・ハンドラテストで使用するインメモリの配送チャネル。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! crafix-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crafix_domain::notification::{DeliveryId, NotificationError, NotificationMessage};

use crate::notification::DeliveryChannel;

/// 送信されたメッセージを記録するモック
///
/// 既定では送信に成功し、`<mock-{連番}@crafix.test>` を配送 ID として返す。
#[derive(Clone, Default)]
pub struct MockDeliveryChannel {
    sent:      Arc<Mutex<Vec<NotificationMessage>>>,
    failure:   Arc<Mutex<Option<NotificationError>>>,
    reachable: Arc<Mutex<Option<bool>>>,
}

impl MockDeliveryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の送信を指定したエラーで失敗させる
    pub fn failing_with(error: NotificationError) -> Self {
        let mock = Self::new();
        *mock.failure.lock().unwrap() = Some(error);
        mock
    }

    /// 接続確認の結果を固定する（既定は `true`）
    pub fn set_reachable(&self, reachable: bool) {
        *self.reachable.lock().unwrap() = Some(reachable);
    }

    /// 送信が試みられたメッセージ（失敗したものを含む）
    pub fn sent_messages(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DeliveryChannel for MockDeliveryChannel {
    async fn verify_connectivity(&self) -> bool {
        self.reachable.lock().unwrap().unwrap_or(true)
    }

    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryId, NotificationError> {
        let count = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(message.clone());
            sent.len()
        };

        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(DeliveryId::new(format!("<mock-{count}@crafix.test>"))),
        }
    }
}
