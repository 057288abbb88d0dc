// SPDX-License-Identifier: MPL-2.0
//! Question view: one prompt at a time with reveal and navigation controls.
//!
//! Next is hidden on the last question, where Finish takes its place.
//! Previous stays visible but is disabled on the first question.

use crate::i18n::fluent::I18n;
use crate::session::{QuestionBody, QuestionPane};
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::focus::{Control, Focus};
use crate::ui::styles::{button as button_styles, container as container_styles};
use fluent_bundle::FluentValue;
use iced::widget::{button, container, text, Button, Column, Row, Text};
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pane: &'a QuestionPane,
    pub focus: Focus,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    ShowAnswer,
    Next,
    Finish,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Previous,
    ShowAnswer,
    Next,
    Finish,
    Back,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Previous => Event::Previous,
        Message::ShowAnswer => Event::ShowAnswer,
        Message::Next => Event::Next,
        Message::Finish => Event::Finish,
        Message::Back => Event::Back,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let pane = ctx.pane;

    let (heading, body): (String, Element<'_, Message>) = match &pane.body {
        QuestionBody::Prompt { text: prompt, answer } => {
            let mut body = Column::new()
                .spacing(spacing::MD)
                .push(Text::new(prompt.as_str()).size(typography::BODY_LG));
            if pane.answer_revealed {
                body = body.push(
                    Text::new(i18n.tr_with_args(
                        "question-answer",
                        &[("answer", FluentValue::from(answer.as_str()))],
                    ))
                    .size(typography::BODY_LG)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().success.strong.color),
                    }),
                );
            }
            (
                i18n.tr_with_args(
                    "question-number",
                    &[
                        ("current", FluentValue::from(pane.number)),
                        ("total", FluentValue::from(pane.total)),
                    ],
                ),
                body.into(),
            )
        }
        QuestionBody::Malformed => (
            i18n.tr("question-error-number"),
            ErrorDisplay::new(ErrorSeverity::Error)
                .message(i18n.tr("question-error-text"))
                .view(),
        ),
    };

    let focus = ctx.focus;
    let control = |key: &str, control: Control, primary: bool, message: Option<Message>| {
        let base = if primary {
            button_styles::primary
        } else {
            button_styles::secondary
        };
        control_button(i18n.tr(key), focus.is_focused(control), base, message)
    };

    let mut controls = Row::new()
        .spacing(spacing::SM)
        .push(control(
            "question-previous",
            Control::Previous,
            false,
            pane.has_previous.then_some(Message::Previous),
        ))
        .push(control(
            "question-show-answer",
            Control::ShowAnswer,
            true,
            pane.can_reveal.then_some(Message::ShowAnswer),
        ));
    controls = if pane.is_last {
        controls.push(control(
            "question-finish",
            Control::Finish,
            true,
            Some(Message::Finish),
        ))
    } else {
        controls.push(control("question-next", Control::Next, true, Some(Message::Next)))
    };

    let back = button(Text::new(i18n.tr("nav-back")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::secondary)
        .on_press(Message::Back);

    Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .push(Text::new(heading).size(typography::TITLE_MD))
        .push(
            container(body)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(container_styles::panel),
        )
        .push(controls)
        .push(back)
        .into()
}

fn control_button<'a>(
    label: String,
    focused: bool,
    base: fn(&Theme, button::Status) -> button::Style,
    message: Option<Message>,
) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::focusable(base, focused))
        .on_press_maybe(message)
}
