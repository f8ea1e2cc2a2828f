//! # ミドルウェア
//!
//! お問い合わせ API 用のミドルウェアを提供する。

mod origin;

pub use origin::{DEV_ORIGINS, OriginGuard, guard_origin};
