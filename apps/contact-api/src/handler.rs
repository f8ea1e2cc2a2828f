//! # HTTP ハンドラ
//!
//! - `POST /api/contact` - お問い合わせの受け付け
//! - `GET /api/health` - ヘルスチェック
//! - `GET /` - API の案内

mod contact;
mod health;
mod root;

pub use contact::{CONFIRMATION_MESSAGE, ContactState, submit_contact};
pub use health::health_check;
pub use root::api_index;
