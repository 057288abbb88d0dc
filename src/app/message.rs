// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Catalog;
use crate::error::ContentError;
use crate::ui::focus::NavKey;
use crate::ui::{list, question, reading, theme_switcher};
use iced::widget::image::Handle;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The startup catalog load finished.
    CatalogLoaded(Result<Catalog, ContentError>),
    List(list::Message),
    Reading(reading::Message),
    Question(question::Message),
    ThemeSwitcher(theme_switcher::Message),
    /// A passage picture finished loading.
    PictureLoaded {
        request_id: u64,
        result: Result<Handle, String>,
    },
    /// A navigation key was pressed outside any widget.
    Key(NavKey),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Content root directory or base URL (`--root`).
    pub root: Option<String>,
    /// Manifest path relative to the root (`--manifest`).
    pub manifest: Option<String>,
    /// Explicit settings directory, used by tests. The `--config-dir`
    /// flag goes through `paths::init_cli_override` instead.
    pub config_dir: Option<PathBuf>,
}
