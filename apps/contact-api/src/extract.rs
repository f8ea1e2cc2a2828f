//! # お問い合わせフォームの抽出
//!
//! リクエストボディから [`ContactForm`] を取り出す axum エクストラクタ。
//!
//! | Content-Type | 解釈 |
//! |--------------|------|
//! | `application/x-www-form-urlencoded` | フォーム項目の組 |
//! | それ以外 | JSON オブジェクト |
//!
//! JSON の値は文字列をそのまま、数値・真偽値を文字列化して受け取る。
//! `null`・`false`・数値の 0 は未入力とし、配列やオブジェクトを含むボディは不正とする。

use axum::{
    Form,
    Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use crafix_domain::contact::ContactForm;
use crafix_shared::{event_log::event, log_business_event};
use serde_json::{Map, Value};

use crate::error::ContactApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// リクエストボディから取り出したお問い合わせフォーム
#[derive(Debug)]
pub struct ContactPayload(pub ContactForm);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ContactApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE));

        if is_form {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| malformed(&rejection.body_text()))?;
            return Ok(Self(ContactForm::from_pairs(pairs)));
        }

        let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(|rejection| malformed(&rejection.body_text()))?;

        let mut pairs = Vec::with_capacity(object.len());
        for (key, value) in object {
            let value = match value {
                Value::Null | Value::Bool(false) => continue,
                Value::Number(number) if number.as_f64() == Some(0.0) => continue,
                Value::String(text) => text,
                Value::Bool(flag) => flag.to_string(),
                Value::Number(number) => number.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(malformed(&format!("{key} に入れ子の値は指定できません")));
                }
            };
            pairs.push((key, value));
        }

        Ok(Self(ContactForm::from_pairs(pairs)))
    }
}

fn malformed(detail: &str) -> ContactApiError {
    log_business_event!(
        event.category = event::category::CONTACT,
        event.action = event::action::CONTACT_REJECTED,
        event.result = event::result::FAILURE,
        reason = "malformed_body",
        detail = detail,
        "リクエストボディを解釈できないためお問い合わせを拒否"
    );
    ContactApiError::MalformedRequest
}
