//! # お問い合わせ
//!
//! Web サイトの訪問者が送信したお問い合わせフォームの内容を表す。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`ContactForm`] | 入力フォーム | リクエストから取り出した未検証の項目 |
//! | [`ContactSubmission`] | お問い合わせ内容 | 必須項目の検証を通過した送信内容 |
//!
//! ## 検証ルール
//!
//! - `name` / `email` / `message` は必須。前後の空白を除いて空なら未入力とみなす
//! - メールアドレスの形式は検証しない（通知の宛先は固定で、入力値は本文に載るだけ）
//! - 任意項目（`company` / `project` / `budget`）は空文字なら未入力として扱う（空白のみの値は入力ありのまま）
//! - 値そのものはトリムせず、入力されたまま保持する

use crate::DomainError;

/// 必須項目名（フォームの並び順）
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// 入力フォーム（未検証）
///
/// リクエストボディから取り出した項目をそのまま保持する。
/// 未知の項目は無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name:    Option<String>,
    pub email:   Option<String>,
    pub company: Option<String>,
    pub project: Option<String>,
    pub budget:  Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    /// 項目名と値の組からフォームを組み立てる
    ///
    /// 同じ項目が複数回現れた場合は後勝ち。
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "company" => &mut form.company,
                "project" => &mut form.project,
                "budget" => &mut form.budget,
                "message" => &mut form.message,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }
}

/// お問い合わせ内容（検証済み）
///
/// リクエストスコープでのみ存在し、永続化はしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name:    String,
    email:   String,
    company: Option<String>,
    project: Option<String>,
    budget:  Option<String>,
    message: String,
}

impl ContactSubmission {
    /// 入力フォームを検証してお問い合わせ内容を作成する
    ///
    /// # Errors
    ///
    /// 必須項目が1つでも欠けていれば、欠けた項目をすべて列挙した
    /// [`DomainError::MissingRequiredFields`] を返す。
    pub fn new(form: ContactForm) -> Result<Self, DomainError> {
        let mut missing = Vec::new();
        let name = required(REQUIRED_FIELDS[0], form.name, &mut missing);
        let email = required(REQUIRED_FIELDS[1], form.email, &mut missing);
        let message = required(REQUIRED_FIELDS[2], form.message, &mut missing);

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(DomainError::MissingRequiredFields { missing });
        };

        Ok(Self {
            name,
            email,
            company: optional(form.company),
            project: optional(form.project),
            budget: optional(form.budget),
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    let value = value.filter(|v| !is_blank(v));
    if value.is_none() {
        missing.push(field);
    }
    value
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
