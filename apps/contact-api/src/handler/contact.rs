//! # お問い合わせハンドラ
//!
//! `POST /api/contact` を処理する。
//!
//! | 結果 | HTTP ステータス | ボディ |
//! |------|----------------|--------|
//! | 配送成功 | 200 | `{success: true, message, messageId}` |
//! | ボディ不正・必須項目欠落 | 400 | `{success: false, message}` |
//! | 配送失敗 | 500 | `{success: false, message}`（詳細はログのみ） |

use std::sync::Arc;

use axum::{Json, extract::State};
use crafix_domain::notification::DeliveryResult;
use crafix_shared::{
    ApiResponse,
    event_log::{error, event},
    log_business_event,
};

use crate::{error::ContactApiError, extract::ContactPayload, usecase::ContactUseCaseImpl};

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We will get back to you within 24 hours.";

/// お問い合わせハンドラの State
pub struct ContactState {
    pub usecase: ContactUseCaseImpl,
}

/// お問い合わせを受け付けて通知メールを配送する
pub async fn submit_contact(
    State(state): State<Arc<ContactState>>,
    ContactPayload(form): ContactPayload,
) -> Result<Json<ApiResponse>, ContactApiError> {
    let result = state.usecase.submit(form).await.inspect_err(|e| {
        log_business_event!(
            event.category = event::category::CONTACT,
            event.action = event::action::CONTACT_REJECTED,
            event.result = event::result::FAILURE,
            reason = "missing_required_fields",
            detail = %e,
            "必須項目が欠けているためお問い合わせを拒否"
        );
    })?;

    match result {
        DeliveryResult::Delivered(delivery_id) => {
            log_business_event!(
                event.category = event::category::CONTACT,
                event.action = event::action::CONTACT_DELIVERED,
                event.result = event::result::SUCCESS,
                delivery_id = %delivery_id,
                "お問い合わせの通知メールを送信"
            );
            Ok(Json(ApiResponse::delivered(
                CONFIRMATION_MESSAGE,
                delivery_id.into_string(),
            )))
        }
        DeliveryResult::Failed { error_detail } => {
            tracing::error!(
                error.category = error::category::EXTERNAL_SERVICE,
                error.kind = error::kind::MAIL_DELIVERY,
                "通知メールの配送に失敗: {}",
                error_detail
            );
            log_business_event!(
                event.category = event::category::CONTACT,
                event.action = event::action::CONTACT_DELIVERY_FAILED,
                event.result = event::result::FAILURE,
                "お問い合わせの通知メールを送信できなかった"
            );
            Err(ContactApiError::DeliveryFailure(error_detail))
        }
    }
}
