//! # 通知メール組み立て
//!
//! 検証済みのお問い合わせ内容から通知メッセージを作る。
//!
//! 本文は文字列の埋め込みのみで組み立て、入力値はそのまま載せる。
//! 未入力の任意項目は行ごと省略する。
//!
//! TODO: 入力値の HTML エスケープ。導入すると本文の出力が変わるため、
//! 受信側のメール表示を確認してから切り替える。

use chrono::{DateTime, Utc};
use crafix_domain::{contact::ContactSubmission, notification::NotificationMessage};

const SUBJECT_PREFIX: &str = "New Contact Form Submission - ";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// 通知メール組み立て
#[derive(Debug, Clone)]
pub struct MessageComposer {
    sender:    String,
    recipient: String,
}

impl MessageComposer {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            sender:    sender.into(),
            recipient: recipient.into(),
        }
    }

    /// 通知メッセージを組み立てる
    ///
    /// 同じ内容・同じ時刻なら常に同じ本文になる。
    pub fn compose(
        &self,
        submission: &ContactSubmission,
        sent_at: DateTime<Utc>,
    ) -> NotificationMessage {
        NotificationMessage {
            sender: self.sender.clone(),
            recipient: self.recipient.clone(),
            subject: format!("{SUBJECT_PREFIX}{}", submission.name()),
            html_body: render_body(submission, sent_at),
            sent_at,
        }
    }
}

fn render_body(submission: &ContactSubmission, sent_at: DateTime<Utc>) -> String {
    let mut fields = String::new();
    push_field(&mut fields, "Name", submission.name());
    push_field(&mut fields, "Email", submission.email());
    if let Some(company) = submission.company() {
        push_field(&mut fields, "Company/Organization", company);
    }
    if let Some(project) = submission.project() {
        push_field(&mut fields, "Project Type", project);
    }
    if let Some(budget) = submission.budget() {
        push_field(&mut fields, "Budget Range", budget);
    }

    let message = submission.message().replace('\n', "<br>");
    let submitted_on = sent_at.format(TIMESTAMP_FORMAT);

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9f9f9;">
  <div style="background-color: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1);">
    <h2 style="color: #333; margin-bottom: 20px;">New Contact Form Submission</h2>
{fields}    <div style="margin-bottom: 15px;">
      <strong style="color: #555;">Message:</strong>
      <div style="color: #333; background-color: #f5f5f5; padding: 15px; border-radius: 5px; margin-top: 5px;">{message}</div>
    </div>
    <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #eee; color: #666; font-size: 14px;">
      <p>This message was sent from the Crafix Media contact form.</p>
      <p>Submitted on: {submitted_on}</p>
    </div>
  </div>
</div>
"#
    )
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!(
        r#"    <div style="margin-bottom: 15px;">
      <strong style="color: #555;">{label}:</strong>
      <span style="color: #333;">{value}</span>
    </div>
"#
    ));
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use crafix_domain::contact::ContactForm;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sent_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    fn composer() -> MessageComposer {
        MessageComposer::new("sender@gmail.com", "hello@crafixmedia.com")
    }

    fn submission(pairs: &[(&str, &str)]) -> ContactSubmission {
        ContactSubmission::new(ContactForm::from_pairs(pairs.iter().copied())).unwrap()
    }

    fn full_submission() -> ContactSubmission {
        submission(&[
            ("name", "Ada Lovelace"),
            ("email", "ada@example.com"),
            ("company", "Analytical Engines Ltd"),
            ("project", "Website"),
            ("budget", "$5k - $10k"),
            ("message", "Hello\nWe need a new site."),
        ])
    }

    #[test]
    fn test_送信者と宛先と件名() {
        let message = composer().compose(&full_submission(), sent_at());

        assert_eq!(message.sender, "sender@gmail.com");
        assert_eq!(message.recipient, "hello@crafixmedia.com");
        assert_eq!(message.subject, "New Contact Form Submission - Ada Lovelace");
        assert_eq!(message.sent_at, sent_at());
    }

    #[test]
    fn test_全項目入りの本文() {
        let message = composer().compose(&full_submission(), sent_at());

        insta::assert_snapshot!(message.html_body);
    }

    #[test]
    fn test_同じ内容と時刻なら本文は同一() {
        let first = composer().compose(&full_submission(), sent_at());
        let second = composer().compose(&full_submission(), sent_at());

        assert_eq!(first, second);
    }

    #[test]
    fn test_未入力の任意項目は本文に現れない() {
        let message = composer().compose(
            &submission(&[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("company", ""),
                ("message", "Hello"),
            ]),
            sent_at(),
        );

        assert!(!message.html_body.contains("Company/Organization"));
        assert!(!message.html_body.contains("Project Type"));
        assert!(!message.html_body.contains("Budget Range"));
    }

    #[test]
    fn test_空白のみの任意項目も入力ありとして載る() {
        let message = composer().compose(
            &submission(&[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("company", "  "),
                ("message", "Hello"),
            ]),
            sent_at(),
        );

        assert!(message.html_body.contains(
            "<strong style=\"color: #555;\">Company/Organization:</strong>\n      <span style=\"color: #333;\">  </span>"
        ));
    }

    #[test]
    fn test_入力された任意項目はそのまま載る() {
        let message = composer().compose(&full_submission(), sent_at());

        assert!(message.html_body.contains(
            "<strong style=\"color: #555;\">Budget Range:</strong>\n      <span style=\"color: #333;\">$5k - $10k</span>"
        ));
    }

    #[test]
    fn test_メッセージの改行はbrタグになる() {
        let message = composer().compose(&full_submission(), sent_at());

        assert!(message.html_body.contains("Hello<br>We need a new site."));
    }

    #[test]
    fn test_入力値はエスケープせずに埋め込む() {
        let message = composer().compose(
            &submission(&[
                ("name", "<b>Ada</b>"),
                ("email", "ada@example.com"),
                ("message", "a & b"),
            ]),
            sent_at(),
        );

        assert!(message.html_body.contains("<span style=\"color: #333;\"><b>Ada</b></span>"));
        assert!(message.html_body.contains("a & b"));
    }

    #[test]
    fn test_送信日時が本文に載る() {
        let message = composer().compose(&full_submission(), sent_at());

        assert!(message.html_body.contains("<p>Submitted on: 2024-05-01 09:30:00 UTC</p>"));
    }
}
