// SPDX-License-Identifier: MPL-2.0
//! Toggle group offering the fixed set of reading themes.

use crate::i18n::fluent::I18n;
use crate::theme::{KnownTheme, ThemeName};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::alignment::Vertical;
use iced::widget::{button, Row, Text};
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: &'a ThemeName,
}

#[derive(Debug, Clone)]
pub enum Message {
    Selected(KnownTheme),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Carries the theme identifier to apply.
    Apply(&'static str),
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Selected(theme) => Event::Apply(theme.name()),
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active = KnownTheme::for_name(ctx.active);

    KnownTheme::ALL.into_iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("theme-label")).size(typography::BODY)),
        |row, theme| {
            let style = if theme == active {
                button_styles::primary
            } else {
                button_styles::secondary
            };
            row.push(
                button(Text::new(ctx.i18n.tr(theme.i18n_key())).size(typography::CAPTION))
                    .style(style)
                    .on_press(Message::Selected(theme)),
            )
        },
    )
    .into()
}
