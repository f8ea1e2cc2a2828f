//! # .env ファイル生成
//!
//! 回答から `crafix-contact-api` が読む `.env` の内容と、完了後の案内文を作る。
//! SMTP は Gmail（`smtp.gmail.com:587`、STARTTLS）固定。

use std::io::{self, Write};

use crate::prompt::SetupAnswers;

/// `.env` の内容を組み立てる
pub fn render_env(answers: &SetupAnswers) -> String {
    format!(
        "# Server Configuration
PORT={port}

# Email Configuration (Gmail)
EMAIL_HOST=smtp.gmail.com
EMAIL_PORT=587
EMAIL_USER={email}
EMAIL_PASS={app_password}
EMAIL_FROM={email}
EMAIL_TO={recipient}

# CORS Configuration
CORS_ORIGIN={cors_origin}
",
        port = env_value(&answers.port),
        email = env_value(&answers.email),
        app_password = env_value(&answers.app_password),
        recipient = env_value(&answers.recipient),
        cors_origin = env_value(&answers.cors_origin),
    )
}

/// 空白・`#`・引用符を含む値はダブルクォートで囲む
fn env_value(value: &str) -> String {
    if value.contains(|c: char| c.is_whitespace() || matches!(c, '#' | '"' | '\'')) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// 書き込み結果の要約と次の手順を出力する
pub fn write_summary<W: Write>(output: &mut W, answers: &SetupAnswers) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "✅ .env file created successfully!")?;
    writeln!(output)?;
    writeln!(output, "📧 Email Configuration:")?;
    writeln!(output, "   From: {}", answers.email)?;
    writeln!(output, "   To: {}", answers.recipient)?;
    writeln!(output, "   Port: {}", answers.port)?;
    writeln!(output, "   CORS Origin: {}", answers.cors_origin)?;
    writeln!(output)?;
    writeln!(output, "🔧 Next Steps:")?;
    writeln!(output, "1. Start the server: cargo run -p crafix-contact-api")?;
    writeln!(output, "2. Check it is up: curl http://localhost:{}/api/health", answers.port)?;
    writeln!(output, "3. Test the contact form on your website")?;
    writeln!(output)?;
    writeln!(output, "⚠️  Important: Make sure you have:")?;
    writeln!(output, "- Enabled 2-Step Verification on your Gmail account")?;
    writeln!(output, "- Generated an App Password for this application")?;
    writeln!(output, "- The frontend is running on the specified CORS origin")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn answers() -> SetupAnswers {
        SetupAnswers {
            email:        "me@gmail.com".to_string(),
            app_password: "abcd efgh ijkl mnop".to_string(),
            recipient:    "hello@crafixmedia.com".to_string(),
            port:         "3000".to_string(),
            cors_origin:  "http://localhost:5500".to_string(),
        }
    }

    #[test]
    fn test_env_ファイルの内容() {
        insta::assert_snapshot!(render_env(&answers()));
    }

    #[test]
    fn test_空白を含む値はクォートする() {
        assert_eq!(env_value("abcd efgh"), "\"abcd efgh\"");
        assert_eq!(env_value(r#"a"b"#), r#""a\"b""#);
        assert_eq!(env_value("plain"), "plain");
    }

    #[test]
    fn test_送信元は入力したgmailアドレスになる() {
        let env = render_env(&answers());

        assert!(env.contains("EMAIL_USER=me@gmail.com\n"));
        assert!(env.contains("EMAIL_FROM=me@gmail.com\n"));
    }

    #[test]
    fn test_要約に回答内容が含まれる() {
        let mut output = Vec::new();

        write_summary(&mut output, &answers()).unwrap();

        let summary = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            &lines[3..8],
            &[
                "📧 Email Configuration:",
                "   From: me@gmail.com",
                "   To: hello@crafixmedia.com",
                "   Port: 3000",
                "   CORS Origin: http://localhost:5500",
            ]
        );
    }
}
