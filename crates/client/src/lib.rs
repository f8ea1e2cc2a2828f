//! # Crafix お問い合わせフォームクライアント
//!
//! Web サイト側でフォームの入力値を API に送り、その結果を
//! 送信ボタンと通知バナーで利用者に伝える。
//!
//! ## モジュール構成
//!
//! - [`api`] - お問い合わせ API クライアント（reqwest）
//! - [`controller`] - 送信ボタンの状態機械
//! - [`banner`] - 通知バナーの表示管理
//! - [`view`] - 画面描画のトレイトと見た目の値
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use crafix_client::{ApiEndpoint, ContactFormController, HttpContactApi};
//!
//! let api = HttpContactApi::new(ApiEndpoint::for_hostname(&hostname));
//! let controller = ContactFormController::new(api, Arc::new(dom_view), "Send Message");
//! controller.submit(form_data).await;
//! ```

pub mod api;
pub mod banner;
pub mod controller;
#[cfg(test)]
mod test_support;
pub mod view;

pub use api::{ApiEndpoint, ClientError, ContactApi, ContactFormData, HttpContactApi};
pub use banner::BannerManager;
pub use controller::{ContactFormController, SubmitOutcome};
pub use view::{Banner, BannerId, BannerKind, ButtonAppearance, ButtonState, ButtonTone, FormView};
