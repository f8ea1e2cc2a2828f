//! # お問い合わせフォームの送信制御
//!
//! 1回の送信ごとに、送信ボタンを次の状態機械で動かす。
//!
//! ```text
//! Idle ──submit──▶ Pending ──success:true──▶ Success ──3秒──▶ Idle
//!                     │
//!                     └──失敗応答 / 通信エラー──▶ Failure ──3秒──▶ Idle
//! ```
//!
//! Idle 以外の状態ではボタンは押せず、その間の送信要求は無視する。

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crate::{
    api::{ContactApi, ContactFormData},
    banner::BannerManager,
    view::{BannerKind, ButtonAppearance, ButtonState, FormView},
};

/// 成功・失敗表示から Idle に戻るまでの時間
pub const BUTTON_REVERT_AFTER: Duration = Duration::from_secs(3);

const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you within 24 hours.";
const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// 1回の送信要求の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
    /// 前の送信が終わっていないため受け付けなかった
    Ignored,
}

/// お問い合わせフォームの送信制御
pub struct ContactFormController<A, V> {
    api:            A,
    view:           Arc<V>,
    banners:        BannerManager<V>,
    state:          Arc<Mutex<ButtonState>>,
    original_label: String,
    revert_after:   Duration,
}

impl<A: ContactApi, V: FormView> ContactFormController<A, V> {
    pub fn new(api: A, view: Arc<V>, original_label: impl Into<String>) -> Self {
        let banners = BannerManager::new(Arc::clone(&view));
        Self {
            api,
            view,
            banners,
            state: Arc::new(Mutex::new(ButtonState::Idle)),
            original_label: original_label.into(),
            revert_after: BUTTON_REVERT_AFTER,
        }
    }

    pub fn state(&self) -> ButtonState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 通知バナーの操作（閉じるボタンから使う）
    pub fn banners(&self) -> &BannerManager<V> {
        &self.banners
    }

    /// フォームを送信する
    pub async fn submit(&self, form: ContactFormData) -> SubmitOutcome {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if *state != ButtonState::Idle {
                tracing::debug!(state = ?*state, "送信中のため送信要求を無視");
                return SubmitOutcome::Ignored;
            }
            *state = ButtonState::Pending;
        }
        self.render(ButtonState::Pending);

        let outcome = match self.api.submit(&form).await {
            Ok(response) if response.success => {
                self.transition(ButtonState::Success);
                self.banners.show(BannerKind::Success, SUCCESS_MESSAGE);
                self.view.reset_form();
                SubmitOutcome::Succeeded
            }
            Ok(response) => {
                let message = if response.message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    response.message
                };
                self.transition(ButtonState::Failure);
                self.banners.show(BannerKind::Error, message);
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(error = %e, "お問い合わせの送信に失敗");
                self.transition(ButtonState::Failure);
                self.banners.show(BannerKind::Error, NETWORK_ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        };

        self.schedule_revert();
        outcome
    }

    fn transition(&self, next: ButtonState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.render(next);
    }

    fn render(&self, state: ButtonState) {
        self.view
            .render_button(&ButtonAppearance::for_state(state, &self.original_label));
    }

    fn schedule_revert(&self) {
        let state = Arc::clone(&self.state);
        let view = Arc::clone(&self.view);
        let idle = ButtonAppearance::for_state(ButtonState::Idle, &self.original_label);
        let revert_after = self.revert_after;

        tokio::spawn(async move {
            tokio::time::sleep(revert_after).await;
            *state.lock().unwrap_or_else(PoisonError::into_inner) = ButtonState::Idle;
            view.render_button(&idle);
        });
    }
}
