//! # Crafix セットアップ
//!
//! `crafix-contact-api` 用の `.env` を対話形式で作成する。
//!
//! ## 使い方
//!
//! ```bash
//! # カレントディレクトリに .env を作成
//! cargo run -p crafix-setup
//!
//! # 出力先を指定
//! cargo run -p crafix-setup -- apps/contact-api/.env
//! ```
//!
//! 既存の `.env` は警告の上で上書きする。

mod env_file;
mod prompt;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;

const DEFAULT_ENV_PATH: &str = ".env";

fn main() -> anyhow::Result<()> {
    let env_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_ENV_PATH), PathBuf::from);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    writeln!(output, "🚀 Crafix Media Backend Setup")?;
    writeln!(output)?;
    if env_path.exists() {
        writeln!(
            output,
            "⚠️  {} already exists. This will overwrite it.",
            env_path.display()
        )?;
        writeln!(output)?;
    }

    let answers = prompt::prompt_all(&mut input, &mut output).context("入力の読み取りに失敗しました")?;

    std::fs::write(&env_path, env_file::render_env(&answers))
        .with_context(|| format!("{} の書き込みに失敗しました", env_path.display()))?;

    env_file::write_summary(&mut output, &answers)?;
    Ok(())
}
