//! SMTP 配送チャネル実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! ポート 465 は接続直後から TLS、それ以外は STARTTLS を提示されれば使う。

use std::{fmt, time::SystemTime};

use async_trait::async_trait;
use crafix_domain::notification::{DeliveryId, NotificationError, NotificationMessage};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use uuid::Uuid;

use super::DeliveryChannel;

/// 接続直後から TLS を張るポート（SMTPS）
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP 認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    pub user:     String,
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// SMTP 接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host:        String,
    pub port:        u16,
    pub credentials: Option<SmtpCredentials>,
}

/// SMTP 配送チャネル
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// 接続は送信ごとに張られ、構築時点ではサーバーに接続しない。
pub struct SmtpDeliveryChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpDeliveryChannel {
    /// 新しい SMTP 配送チャネルを作成
    ///
    /// # Errors
    ///
    /// TLS 設定を組み立てられない場合は [`NotificationError::Connection`]。
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotificationError> {
        let builder = if settings.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .map_err(|e| NotificationError::Connection(format!("TLS 設定失敗: {e}")))?
                .port(settings.port)
        } else {
            let tls = TlsParameters::new(settings.host.clone())
                .map_err(|e| NotificationError::Connection(format!("TLS 設定失敗: {e}")))?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
                .port(settings.port)
                .tls(Tls::Opportunistic(tls))
        };

        let builder = match &settings.credentials {
            Some(credentials) => builder.credentials(Credentials::new(
                credentials.user.clone(),
                credentials.password.clone(),
            )),
            None => builder,
        };

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl DeliveryChannel for SmtpDeliveryChannel {
    async fn verify_connectivity(&self) -> bool {
        match self.transport.test_connection().await {
            Ok(reachable) => reachable,
            Err(e) => {
                tracing::debug!(error = %e, "SMTP 接続確認に失敗");
                false
            }
        }
    }

    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryId, NotificationError> {
        let (email, delivery_id) = build_message(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(delivery_id)
    }
}

/// 通知メッセージから HTML メールを組み立てる
///
/// Message-ID は送信元ドメインで発番し、そのまま配送 ID として返す。
fn build_message(
    message: &NotificationMessage,
) -> Result<(Message, DeliveryId), NotificationError> {
    let from: Mailbox = message
        .sender
        .parse()
        .map_err(|e| NotificationError::Build(format!("送信元アドレス不正: {e}")))?;
    let to: Mailbox = message
        .recipient
        .parse()
        .map_err(|e| NotificationError::Build(format!("宛先アドレス不正: {e}")))?;

    let delivery_id = DeliveryId::new(format!(
        "<{}@{}>",
        Uuid::now_v7(),
        from.email.domain()
    ));

    let email = Message::builder()
        .from(from)
        .to(to)
        .subject(message.subject.as_str())
        .message_id(Some(delivery_id.as_str().to_string()))
        .date(SystemTime::from(message.sent_at))
        .header(ContentType::TEXT_HTML)
        .body(message.html_body.clone())
        .map_err(|e| NotificationError::Build(format!("メッセージ構築失敗: {e}")))?;

    Ok((email, delivery_id))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn notification(sender: &str, recipient: &str) -> NotificationMessage {
        NotificationMessage {
            sender:    sender.to_string(),
            recipient: recipient.to_string(),
            subject:   "New Contact Form Submission - Ada".to_string(),
            html_body: "<h2>New Contact Form Submission</h2>".to_string(),
            sent_at:   Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_smtp配送チャネルはスレッド間で共有できる() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmtpDeliveryChannel>();
    }

    #[test]
    fn test_message_idは送信元ドメインで発番され配送idになる() {
        let (email, delivery_id) =
            build_message(&notification("noreply@crafixmedia.com", "hello@crafixmedia.com"))
                .unwrap();

        let id = delivery_id.as_str();
        assert!(id.starts_with('<'));
        assert!(id.ends_with("@crafixmedia.com>"));

        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains(&format!("Message-ID: {id}")));
    }

    #[test]
    fn test_html本文として組み立てられる() {
        let (email, _) =
            build_message(&notification("noreply@crafixmedia.com", "hello@crafixmedia.com"))
                .unwrap();

        let formatted = String::from_utf8(email.formatted()).unwrap();
        assert!(formatted.contains("Content-Type: text/html; charset=utf-8"));
        assert!(formatted.contains("Subject: New Contact Form Submission - Ada"));
        assert!(formatted.contains("<h2>New Contact Form Submission</h2>"));
    }

    #[test]
    fn test_送信元アドレスが不正ならbuildエラー() {
        let result = build_message(&notification("not an address", "hello@crafixmedia.com"));

        assert!(matches!(result, Err(NotificationError::Build(_))));
    }

    #[test]
    fn test_宛先アドレスが不正ならbuildエラー() {
        let result = build_message(&notification("noreply@crafixmedia.com", ""));

        assert!(matches!(result, Err(NotificationError::Build(_))));
    }

    #[test]
    fn test_認証情報のdebug表示はパスワードを伏せる() {
        let credentials = SmtpCredentials {
            user:     "sender@gmail.com".to_string(),
            password: "app-password".to_string(),
        };

        assert_eq!(
            format!("{credentials:?}"),
            r#"SmtpCredentials { user: "sender@gmail.com", password: "***" }"#
        );
    }
}
