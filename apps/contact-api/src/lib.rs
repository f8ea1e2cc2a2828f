//! # お問い合わせ API ライブラリ
//!
//! Web サイトのお問い合わせフォームを受け付け、通知メールとして
//! 固定の宛先に転送する API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の初期化とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `error`: HTTP API のエラーとレスポンス変換
//! - `extract`: リクエストボディからのフォーム抽出
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（オリジン検証）
//! - `usecase`: お問い合わせの検証・組み立て・配送

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
#[cfg(test)]
mod test_support;
pub mod usecase;
