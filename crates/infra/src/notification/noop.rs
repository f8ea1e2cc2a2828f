//! Noop 配送チャネル実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! ローカル開発や送信サービスを持たない環境で使用する。

use async_trait::async_trait;
use crafix_domain::notification::{DeliveryId, NotificationError, NotificationMessage};
use uuid::Uuid;

use super::DeliveryChannel;

/// Noop 配送チャネル（ログ出力のみ）
#[derive(Debug, Clone, Default)]
pub struct NoopDeliveryChannel;

#[async_trait]
impl DeliveryChannel for NoopDeliveryChannel {
    async fn verify_connectivity(&self) -> bool {
        true
    }

    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryId, NotificationError> {
        let delivery_id = DeliveryId::new(format!("<{}@noop>", Uuid::now_v7()));
        tracing::info!(
            to = %message.recipient,
            subject = %message.subject,
            delivery_id = %delivery_id,
            "Noop: メール送信をスキップ"
        );
        Ok(delivery_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn test_送信をスキップして配送idを払い出す() {
        let channel = NoopDeliveryChannel;
        let message = NotificationMessage {
            sender:    "noreply@example.com".to_string(),
            recipient: "hello@example.com".to_string(),
            subject:   "テスト件名".to_string(),
            html_body: "<p>テスト</p>".to_string(),
            sent_at:   Utc::now(),
        };

        let result = channel.send(&message).await;

        let delivery_id = result.unwrap();
        assert!(delivery_id.as_str().ends_with("@noop>"));
    }

    #[tokio::test]
    async fn test_接続確認は常に成功する() {
        assert!(NoopDeliveryChannel.verify_connectivity().await);
    }
}
