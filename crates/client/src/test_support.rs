//! テスト用の画面と API スタブ

use std::sync::Mutex;

use async_trait::async_trait;
use crafix_shared::ApiResponse;

use crate::{
    api::{ClientError, ContactApi, ContactFormData},
    view::{Banner, BannerId, ButtonAppearance, FormView},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    RenderButton(ButtonAppearance),
    ResetForm,
    ShowBanner(Banner),
    RemoveBanner(BannerId),
}

/// 描画操作を記録する画面
#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_button(&self) -> Option<ButtonAppearance> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::RenderButton(appearance) => Some(appearance),
            _ => None,
        })
    }

    pub fn visible_banners(&self) -> Vec<BannerId> {
        let mut visible = Vec::new();
        for event in self.events() {
            match event {
                ViewEvent::ShowBanner(banner) => visible.push(banner.id),
                ViewEvent::RemoveBanner(id) => visible.retain(|shown| *shown != id),
                _ => {}
            }
        }
        visible
    }

    pub fn shown_banners(&self) -> Vec<Banner> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::ShowBanner(banner) => Some(banner),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl FormView for RecordingView {
    fn render_button(&self, appearance: &ButtonAppearance) {
        self.record(ViewEvent::RenderButton(appearance.clone()));
    }

    fn reset_form(&self) {
        self.record(ViewEvent::ResetForm);
    }

    fn show_banner(&self, banner: &Banner) {
        self.record(ViewEvent::ShowBanner(banner.clone()));
    }

    fn remove_banner(&self, id: BannerId) {
        self.record(ViewEvent::RemoveBanner(id));
    }
}

/// 決まった応答を返す API スタブ
pub struct StubContactApi {
    response: Result<ApiResponse, ClientError>,
    received: Mutex<Vec<ContactFormData>>,
}

impl StubContactApi {
    pub fn responding(response: ApiResponse) -> Self {
        Self {
            response: Ok(response),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ClientError) -> Self {
        Self {
            response: Err(error),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<ContactFormData> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactApi for StubContactApi {
    async fn submit(&self, form: &ContactFormData) -> Result<ApiResponse, ClientError> {
        self.received.lock().unwrap().push(form.clone());
        self.response.clone()
    }
}
