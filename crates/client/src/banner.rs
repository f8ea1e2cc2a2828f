//! # 通知バナー
//!
//! 画面に出す通知バナーは常に1つまで。新しいバナーを出すと既存のものは即座に消え、
//! 各バナーは一定時間後、または利用者が閉じた時点で消える。

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crate::view::{Banner, BannerId, BannerKind, FormView};

/// バナーの自動消去までの時間
pub const BANNER_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
struct BannerSlot {
    next_id: u64,
    current: Option<BannerId>,
}

/// 通知バナーの表示を管理する
///
/// 自動消去のタイマーは tokio のタスクで動かすため、ランタイム内で使うこと。
pub struct BannerManager<V> {
    view:          Arc<V>,
    slot:          Arc<Mutex<BannerSlot>>,
    dismiss_after: Duration,
}

impl<V> Clone for BannerManager<V> {
    fn clone(&self) -> Self {
        Self {
            view:          Arc::clone(&self.view),
            slot:          Arc::clone(&self.slot),
            dismiss_after: self.dismiss_after,
        }
    }
}

impl<V: FormView> BannerManager<V> {
    pub fn new(view: Arc<V>) -> Self {
        Self::with_dismiss_after(view, BANNER_DISMISS_AFTER)
    }

    pub fn with_dismiss_after(view: Arc<V>, dismiss_after: Duration) -> Self {
        Self {
            view,
            slot: Arc::new(Mutex::new(BannerSlot::default())),
            dismiss_after,
        }
    }

    /// バナーを表示する
    ///
    /// 表示中のバナーがあれば先に取り除く。
    pub fn show(&self, kind: BannerKind, message: impl Into<String>) -> BannerId {
        let id = {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(previous) = slot.current.take() {
                self.view.remove_banner(previous);
            }
            let id = BannerId(slot.next_id);
            slot.next_id += 1;
            slot.current = Some(id);

            self.view.show_banner(&Banner {
                id,
                kind,
                message: message.into(),
            });
            id
        };

        let manager = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(manager.dismiss_after).await;
            manager.dismiss(id);
        });

        id
    }

    /// バナーを閉じる
    ///
    /// すでに別のバナーに置き換わっている場合は何もしない。
    pub fn dismiss(&self, id: BannerId) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.current == Some(id) {
            slot.current = None;
            self.view.remove_banner(id);
        }
    }

    /// 表示中のバナー
    pub fn current(&self) -> Option<BannerId> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{RecordingView, ViewEvent};

    #[tokio::test(start_paused = true)]
    async fn test_バナーは一定時間後に自動で消える() {
        let view = Arc::new(RecordingView::default());
        let sut = BannerManager::new(Arc::clone(&view));

        let id = sut.show(BannerKind::Success, "sent");

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(view.visible_banners(), vec![id]);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(view.visible_banners().is_empty());
        assert_eq!(sut.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_新しいバナーを出すと既存のバナーは即座に消える() {
        let view = Arc::new(RecordingView::default());
        let sut = BannerManager::new(Arc::clone(&view));

        let first = sut.show(BannerKind::Error, "first");
        let second = sut.show(BannerKind::Success, "second");

        assert_eq!(view.visible_banners(), vec![second]);
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::ShowBanner(Banner {
                    id:      first,
                    kind:    BannerKind::Error,
                    message: "first".to_string(),
                }),
                ViewEvent::RemoveBanner(first),
                ViewEvent::ShowBanner(Banner {
                    id:      second,
                    kind:    BannerKind::Success,
                    message: "second".to_string(),
                }),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_置き換えられたバナーのタイマーは後のバナーを消さない() {
        let view = Arc::new(RecordingView::default());
        let sut = BannerManager::new(Arc::clone(&view));

        sut.show(BannerKind::Error, "first");
        tokio::time::sleep(Duration::from_secs(3)).await;
        let second = sut.show(BannerKind::Success, "second");

        // 1つ目のタイマーが満了する時刻
        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert_eq!(view.visible_banners(), vec![second]);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(view.visible_banners().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_閉じる操作で即座に消える() {
        let view = Arc::new(RecordingView::default());
        let sut = BannerManager::new(Arc::clone(&view));
        let id = sut.show(BannerKind::Error, "oops");

        sut.dismiss(id);

        assert!(view.visible_banners().is_empty());

        // タイマー満了時に二重に消さない
        tokio::time::sleep(Duration::from_secs(6)).await;
        let removals = view
            .events()
            .into_iter()
            .filter(|event| matches!(event, ViewEvent::RemoveBanner(_)))
            .count();
        assert_eq!(removals, 1);
    }
}
