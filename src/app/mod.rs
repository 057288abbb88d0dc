// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the domains (content catalog, reading
//! session, theme, localization) and translates messages into side effects
//! such as catalog loading, picture fetching and theme persistence. The
//! startup order lives in [`App::new`]: settings, then the persisted theme,
//! then the catalog load.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::{self, ContentRoot, EmptyReason, FileFailure};
use crate::error::ContentError;
use crate::i18n::fluent::I18n;
use crate::session::{Render, Session};
use crate::theme::{ConfigThemeStorage, ThemeController};
use crate::ui::components::picture::Picture;
use crate::ui::focus::Focus;
use crate::ui::theme_switcher::{self, Event as ThemeSwitcherEvent};
use crate::ui::theming;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Progress of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// The manifest could not be used; no list is shown.
    Failed(ContentError),
    Ready {
        failures: Vec<FileFailure>,
        empty: Option<EmptyReason>,
    },
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    root: ContentRoot,
    session: Session,
    render: Render,
    load_state: LoadState,
    /// Set while the list shows a failed selection.
    selection_failed: bool,
    focus: Focus,
    picture: Option<Picture>,
    next_picture_request: u64,
    theme: ThemeController<ConfigThemeStorage>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("root", &self.root.to_string())
            .field("view", &self.session.view())
            .field("load_state", &self.load_state)
            .field("theme", self.theme.active())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Restores the theme, then starts loading the catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let storage = match flags.config_dir.clone() {
            Some(dir) => ConfigThemeStorage::with_base_dir(dir),
            None => ConfigThemeStorage::new(),
        };
        let mut theme = ThemeController::new(storage);
        theme.restore();

        let raw_root = flags
            .root
            .clone()
            .unwrap_or_else(|| config.content_root().to_string());
        let manifest_path = flags
            .manifest
            .clone()
            .unwrap_or_else(|| config.manifest_path().to_string());

        let (root, load_state, task) = match ContentRoot::parse(&raw_root) {
            Ok(root) => {
                tracing::info!(root = %root, manifest = %manifest_path, "Loading content catalog");
                let fetcher = root.clone();
                let task = Task::perform(
                    async move { content::load(&fetcher, &manifest_path).await },
                    Message::CatalogLoaded,
                );
                (root, LoadState::Loading, task)
            }
            Err(err) => {
                tracing::error!(root = %raw_root, error = %err, "Invalid content root");
                (
                    ContentRoot::directory(config::DEFAULT_CONTENT_ROOT),
                    LoadState::Failed(ContentError::ManifestUnavailable(err.to_string())),
                    Task::none(),
                )
            }
        };

        let session = Session::default();
        let app = App {
            i18n,
            root,
            render: session.render(),
            session,
            load_state,
            selection_failed: false,
            focus: Focus::default(),
            picture: None,
            next_picture_request: 0,
            theme,
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.current_item() {
            Some(item) => format!("{} - {app_name}", item.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.theme.active())
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(result) => {
                self.handle_catalog_loaded(result);
                return Task::none();
            }
            Message::ThemeSwitcher(switcher_message) => {
                match theme_switcher::update(&switcher_message) {
                    ThemeSwitcherEvent::Apply(name) => {
                        self.theme.apply(name);
                    }
                }
                return Task::none();
            }
            Message::PictureLoaded { request_id, result } => {
                if let Some(picture) = self.picture.as_mut() {
                    picture.resolve(request_id, result);
                }
                return Task::none();
            }
            _ => {}
        }

        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            render: &mut self.render,
            focus: &mut self.focus,
            selection_failed: &mut self.selection_failed,
            picture: &mut self.picture,
            next_picture_request: &mut self.next_picture_request,
            root: &self.root,
        };

        match message {
            Message::List(list_message) => update::handle_list_message(&mut ctx, &list_message),
            Message::Reading(reading_message) => {
                update::handle_reading_message(&mut ctx, &reading_message)
            }
            Message::Question(question_message) => {
                update::handle_question_message(&mut ctx, &question_message)
            }
            Message::Key(key) => update::handle_key(&mut ctx, key),
            Message::CatalogLoaded(_)
            | Message::ThemeSwitcher(_)
            | Message::PictureLoaded { .. } => Task::none(),
        }
    }

    fn handle_catalog_loaded(&mut self, result: Result<content::Catalog, ContentError>) {
        match result {
            Ok(catalog) => {
                let empty = catalog.empty_reason();
                if let Some(reason) = empty {
                    tracing::warn!(?reason, "No comprehensions to show");
                }
                self.session = Session::new(catalog.items);
                self.load_state = LoadState::Ready {
                    failures: catalog.failures,
                    empty,
                };
            }
            Err(err) => {
                tracing::error!(error = %err, "Content catalog unavailable");
                self.session = Session::default();
                self.load_state = LoadState::Failed(err);
            }
        }
        self.render = self.session.render();
        self.selection_failed = false;
        self.picture = None;
        self.focus.reset(&self.render);
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            render: &self.render,
            load_state: &self.load_state,
            focus: self.focus,
            selection_failed: self.selection_failed,
            picture: self.picture.as_ref(),
            active_theme: self.theme.active(),
        })
    }
}
