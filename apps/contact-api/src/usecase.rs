//! # ユースケース層
//!
//! お問い合わせの検証・通知メール組み立て・配送を担当する。

mod composer;
mod contact;

pub use composer::MessageComposer;
pub use contact::ContactUseCaseImpl;
