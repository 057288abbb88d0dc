// SPDX-License-Identifier: MPL-2.0
//! Passage picture, fetched and decoded off the UI thread.
//!
//! A reading pane with a valid picture path starts a [`load`] task. The
//! result is matched back by request id, so a picture that arrives after the
//! user has moved on is discarded instead of appearing on the wrong passage.

use crate::content::Fetch;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, typography};
use fluent_bundle::FluentValue;
use iced::widget::image::Handle;
use iced::widget::{image, Text};
use iced::{ContentFit, Element, Length};
use image_rs::GenericImageView;

/// Decoding state of the picture on screen.
#[derive(Debug, Clone)]
pub enum PictureState {
    Loading,
    Loaded(Handle),
    /// Fetch or decode failed; the reason is only logged.
    Failed,
}

#[derive(Debug, Clone)]
pub struct Picture {
    pub request_id: u64,
    pub path: String,
    pub state: PictureState,
}

impl Picture {
    pub fn loading(request_id: u64, path: String) -> Self {
        Self {
            request_id,
            path,
            state: PictureState::Loading,
        }
    }

    /// Applies a finished load if it belongs to this picture.
    ///
    /// Returns `false` for stale results.
    pub fn resolve(&mut self, request_id: u64, result: Result<Handle, String>) -> bool {
        if request_id != self.request_id {
            tracing::debug!(request_id, current = self.request_id, "Discarding stale picture");
            return false;
        }
        self.state = match result {
            Ok(handle) => PictureState::Loaded(handle),
            Err(reason) => {
                tracing::error!(path = %self.path, %reason, "Failed to load image");
                PictureState::Failed
            }
        };
        true
    }

    pub fn view<'a, Message: 'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        match &self.state {
            PictureState::Loading => Text::new(i18n.tr("reading-picture-loading"))
                .size(typography::BODY)
                .into(),
            PictureState::Loaded(handle) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::PICTURE_MAX_HEIGHT))
                .into(),
            PictureState::Failed => ErrorDisplay::new(ErrorSeverity::Error)
                .message(i18n.tr_with_args(
                    "reading-error-picture-load",
                    &[("path", FluentValue::from(self.path.as_str()))],
                ))
                .view(),
        }
    }
}

/// Fetches `path` and decodes it into an image handle.
pub async fn load<F: Fetch>(fetcher: F, request_id: u64, path: String) -> (u64, Result<Handle, String>) {
    let bytes = match fetcher.fetch(&path).await {
        Ok(bytes) => bytes,
        Err(e) => return (request_id, Err(e.to_string())),
    };

    let decoded = tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .unwrap_or_else(|e| Err(format!("Decode task failed: {e}")));

    (request_id, decoded)
}

fn decode(bytes: &[u8]) -> Result<Handle, String> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(Handle::from_rgba(width, height, pixels))
}
