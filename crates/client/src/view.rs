//! # 画面表示
//!
//! 送信ボタンと通知バナーの見た目、およびそれを描画する画面側のトレイト。

/// 送信ボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// 入力受付中
    #[default]
    Idle,
    /// 送信中
    Pending,
    /// 送信成功（一定時間後に Idle へ戻る）
    Success,
    /// 送信失敗（一定時間後に Idle へ戻る）
    Failure,
}

/// ボタンの配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Normal,
    Success,
    Failure,
}

/// 送信ボタンの見た目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub label:    String,
    pub disabled: bool,
    pub tone:     ButtonTone,
}

impl ButtonAppearance {
    /// 状態に応じた見た目を作る
    ///
    /// `Idle` のときは元のラベルに戻し、それ以外は押せない状態にする。
    pub fn for_state(state: ButtonState, original_label: &str) -> Self {
        let (label, tone) = match state {
            ButtonState::Idle => (original_label, ButtonTone::Normal),
            ButtonState::Pending => ("Sending...", ButtonTone::Normal),
            ButtonState::Success => ("Message Sent!", ButtonTone::Success),
            ButtonState::Failure => ("Error", ButtonTone::Failure),
        };

        Self {
            label: label.to_string(),
            disabled: state != ButtonState::Idle,
            tone,
        }
    }
}

/// 通知バナーの識別子（表示ごとに払い出す）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// 通知バナー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id:      BannerId,
    pub kind:    BannerKind,
    pub message: String,
}

/// フォーム画面
///
/// ブラウザの DOM 操作など、実際の描画はこのトレイトの実装側で行う。
pub trait FormView: Send + Sync + 'static {
    fn render_button(&self, appearance: &ButtonAppearance);

    /// 入力欄をすべて空に戻す
    fn reset_form(&self);

    fn show_banner(&self, banner: &Banner);

    fn remove_banner(&self, id: BannerId);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ButtonState::Idle, "Send Message", false, ButtonTone::Normal)]
    #[case(ButtonState::Pending, "Sending...", true, ButtonTone::Normal)]
    #[case(ButtonState::Success, "Message Sent!", true, ButtonTone::Success)]
    #[case(ButtonState::Failure, "Error", true, ButtonTone::Failure)]
    fn test_状態ごとのボタンの見た目(
        #[case] state: ButtonState,
        #[case] label: &str,
        #[case] disabled: bool,
        #[case] tone: ButtonTone,
    ) {
        let appearance = ButtonAppearance::for_state(state, "Send Message");

        assert_eq!(
            appearance,
            ButtonAppearance {
                label: label.to_string(),
                disabled,
                tone,
            }
        );
    }
}
