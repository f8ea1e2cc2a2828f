//! # お問い合わせユースケース
//!
//! 入力フォームを検証し、通知メールを組み立てて配送チャネルに1回だけ渡す。
//! 検証に失敗した場合は配送を試みない。再送はしない。

use std::sync::Arc;

use crafix_domain::{
    DomainError,
    clock::Clock,
    contact::{ContactForm, ContactSubmission},
    notification::DeliveryResult,
};
use crafix_infra::notification::DeliveryChannel;

use super::MessageComposer;

/// お問い合わせユースケース
#[derive(Clone)]
pub struct ContactUseCaseImpl {
    channel:  Arc<dyn DeliveryChannel>,
    composer: MessageComposer,
    clock:    Arc<dyn Clock>,
}

impl ContactUseCaseImpl {
    pub fn new(
        channel: Arc<dyn DeliveryChannel>,
        composer: MessageComposer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            channel,
            composer,
            clock,
        }
    }

    /// お問い合わせを送信する
    ///
    /// # Errors
    ///
    /// 必須項目が欠けていれば [`DomainError`]。配送の失敗はエラーではなく
    /// [`DeliveryResult::Failed`] として返す。
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, form: ContactForm) -> Result<DeliveryResult, DomainError> {
        let submission = ContactSubmission::new(form)?;
        let message = self.composer.compose(&submission, self.clock.now());

        Ok(self.channel.send(&message).await.into())
    }
}
