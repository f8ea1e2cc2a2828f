//! # 対話入力
//!
//! 質問を順番に1つずつ表示し、回答を集める。空の回答は既定値に置き換える。

use std::io::{self, BufRead, Write};

/// セットアップで集める回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    /// 送信元の Gmail アドレス（SMTP ユーザーを兼ねる）
    pub email:        String,
    pub app_password: String,
    /// 通知の宛先
    pub recipient:    String,
    pub port:         String,
    pub cors_origin:  String,
}

struct Question {
    prompt:  &'static str,
    default: &'static str,
}

const QUESTIONS: [Question; 5] = [
    Question {
        prompt:  "Enter your Gmail address: ",
        default: "your-email@gmail.com",
    },
    Question {
        prompt:  "Enter your Gmail App Password: ",
        default: "your-app-password",
    },
    Question {
        prompt:  "Enter recipient email (where contact form emails will be sent): ",
        default: "hello@crafixmedia.com",
    },
    Question {
        prompt:  "Enter server port (default: 3000): ",
        default: "3000",
    },
    Question {
        prompt:  "Enter frontend URL for CORS (default: http://localhost:5500): ",
        default: "http://localhost:5500",
    },
];

/// すべての質問に順番に回答してもらう
///
/// 入力が途中で終わった場合、残りの質問は既定値で埋める。
pub fn prompt_all<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<SetupAnswers> {
    let [email, app_password, recipient, port, cors_origin] = &QUESTIONS;

    // フィールドは記述順に評価される
    Ok(SetupAnswers {
        email:        ask(input, output, email)?,
        app_password: ask(input, output, app_password)?,
        recipient:    ask(input, output, recipient)?,
        port:         ask(input, output, port)?,
        cors_origin:  ask(input, output, cors_origin)?,
    })
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &Question,
) -> io::Result<String> {
    write!(output, "{}", question.prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    Ok(if answer.is_empty() {
        question.default.to_string()
    } else {
        answer.to_string()
    })
}
