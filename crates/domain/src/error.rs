//! # ドメイン層エラー定義
//!
//! お問い合わせ内容の検証で発生するエラー。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `MissingRequiredFields` | 400 Bad Request | 必須項目の欠落・空文字 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、利用者向けの固定文言に変換する。
/// エラーメッセージ自体は運用者向け（どの項目が欠けていたか）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須項目（name / email / message）が未入力
    ///
    /// `missing` には欠けていた項目名がフォームの並び順で入る。
    #[error("必須項目が入力されていません: {}", .missing.join(", "))]
    MissingRequiredFields { missing: Vec<&'static str> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_欠けた項目名がメッセージに列挙される() {
        let error = DomainError::MissingRequiredFields {
            missing: vec!["name", "message"],
        };

        assert_eq!(error.to_string(), "必須項目が入力されていません: name, message");
    }
}
