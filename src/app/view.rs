// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{LoadState, Message};
use crate::i18n::fluent::I18n;
use crate::session::Render;
use crate::theme::ThemeName;
use crate::ui::components::picture::Picture;
use crate::ui::design_tokens::spacing;
use crate::ui::focus::Focus;
use crate::ui::list::{self, ListState, ViewContext as ListViewContext};
use crate::ui::question::{self, ViewContext as QuestionViewContext};
use crate::ui::reading::{self, ViewContext as ReadingViewContext};
use crate::ui::theme_switcher::{self, ViewContext as ThemeSwitcherViewContext};
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub render: &'a Render,
    pub load_state: &'a LoadState,
    pub focus: Focus,
    pub selection_failed: bool,
    pub picture: Option<&'a Picture>,
    pub active_theme: &'a ThemeName,
}

/// Renders the current application view based on the active session render.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.render {
        Render::List(pane) | Render::SelectionFailed { list: pane, .. } => {
            let state = match ctx.load_state {
                LoadState::Loading => ListState::Loading,
                LoadState::Failed(error) => ListState::Failed(error),
                LoadState::Ready { failures, empty } => ListState::Ready {
                    pane,
                    empty: *empty,
                    failures,
                },
            };
            list::view(ListViewContext {
                i18n: ctx.i18n,
                state,
                focused: ctx.focus.list_entry(),
                selection_failed: ctx.selection_failed,
            })
            .map(Message::List)
        }
        Render::Reading(pane) => reading::view(ReadingViewContext {
            i18n: ctx.i18n,
            pane,
            picture: ctx.picture,
            focus: ctx.focus,
        })
        .map(Message::Reading),
        Render::Question(pane) => question::view(QuestionViewContext {
            i18n: ctx.i18n,
            pane,
            focus: ctx.focus,
        })
        .map(Message::Question),
    };

    let column = Column::new()
        .spacing(spacing::LG)
        .push(
            theme_switcher::view(ThemeSwitcherViewContext {
                i18n: ctx.i18n,
                active: ctx.active_theme,
            })
            .map(Message::ThemeSwitcher),
        )
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill),
        );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}
