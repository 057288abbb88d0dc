// SPDX-License-Identifier: MPL-2.0
//! Reading view: the selected passage with its Start Questions and Back actions.

use crate::i18n::fluent::I18n;
use crate::session::{PassageBody, ReadingPane};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::components::picture::Picture;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::focus::{Control, Focus};
use crate::ui::styles::{button as button_styles, container as container_styles};
use fluent_bundle::FluentValue;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the reading view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pane: &'a ReadingPane,
    /// Present while the pane shows a valid picture path.
    pub picture: Option<&'a Picture>,
    pub focus: Focus,
}

#[derive(Debug, Clone)]
pub enum Message {
    StartQuestions,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    StartQuestions,
    Back,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::StartQuestions => Event::StartQuestions,
        Message::Back => Event::Back,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let start = button(Text::new(ctx.i18n.tr("reading-start-questions")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::focusable(
            button_styles::primary,
            ctx.focus.is_focused(Control::StartQuestions),
        ))
        .on_press_maybe(ctx.pane.can_start_questions.then_some(Message::StartQuestions));

    let back = button(Text::new(ctx.i18n.tr("nav-back")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::focusable(
            button_styles::secondary,
            ctx.focus.is_focused(Control::Back),
        ))
        .on_press(Message::Back);

    let passage = container(passage(&ctx))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::panel);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .push(Text::new(ctx.pane.title.as_str()).size(typography::TITLE_MD))
        .push(passage)
        .push(Row::new().spacing(spacing::SM).push(start).push(back));

    scrollable(content).height(Length::Fill).into()
}

fn passage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    match &ctx.pane.body {
        PassageBody::Lines(lines) => lines
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |column, line| {
                column.push(Text::new(line.as_str()).size(typography::BODY_LG))
            })
            .into(),
        PassageBody::Picture { .. } => match ctx.picture {
            Some(picture) => picture.view(i18n),
            None => Text::new(i18n.tr("reading-picture-loading"))
                .size(typography::BODY)
                .into(),
        },
        PassageBody::InvalidText => inline_error(i18n.tr("reading-error-invalid-text")),
        PassageBody::InvalidPicture { .. } => {
            inline_error(i18n.tr("reading-error-invalid-picture"))
        }
        PassageBody::UnknownKind(kind) => inline_error(i18n.tr_with_args(
            "reading-error-unknown-kind",
            &[("kind", FluentValue::from(kind.as_str()))],
        )),
    }
}

fn inline_error<'a>(message: String) -> Element<'a, Message> {
    ErrorDisplay::new(ErrorSeverity::Error).message(message).view()
}
