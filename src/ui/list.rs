// SPDX-License-Identifier: MPL-2.0
//! List view: the catalog of comprehensions, or why there is none.

use crate::content::{EmptyReason, FileFailure};
use crate::error::ContentError;
use crate::i18n::fluent::I18n;
use crate::session::ListPane;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, scrollable, Column, Text};
use iced::{Element, Length};

/// Catalog state as far as the list view is concerned.
#[derive(Debug, Clone, Copy)]
pub enum ListState<'a> {
    Loading,
    Failed(&'a ContentError),
    Ready {
        pane: &'a ListPane,
        empty: Option<EmptyReason>,
        failures: &'a [FileFailure],
    },
}

/// Contextual data needed to render the list view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: ListState<'a>,
    /// Index of the keyboard-focused entry.
    pub focused: Option<usize>,
    /// Set after a select that could not be resolved.
    pub selection_failed: bool,
}

/// Messages emitted by the list view.
#[derive(Debug, Clone)]
pub enum Message {
    Select(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Select(String),
}

/// Process a list message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Select(id) => Event::Select(id.clone()),
    }
}

/// Render the list view.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("list-title")).size(typography::TITLE_LG));

    if ctx.selection_failed {
        content = content.push(
            ErrorDisplay::new(ErrorSeverity::Error)
                .message(ctx.i18n.tr("list-selection-error"))
                .view(),
        );
    }

    let body: Element<'_, Message> = match ctx.state {
        ListState::Loading => Text::new(ctx.i18n.tr("list-loading"))
            .size(typography::BODY_LG)
            .into(),
        ListState::Failed(error) => ErrorDisplay::new(ErrorSeverity::Error)
            .message(ctx.i18n.tr(error.i18n_key()))
            .details(error.to_string())
            .view(),
        ListState::Ready {
            empty: Some(reason),
            failures,
            ..
        } => failure_report(
            ctx.i18n
                .tr_with_args(reason.i18n_key(), &failed_args(failures)),
            failures,
        ),
        ListState::Ready { pane, failures, .. } => {
            let mut column = Column::new().spacing(spacing::MD).push(entries(pane, ctx.focused));
            if !failures.is_empty() {
                column = column.push(failure_report(
                    ctx.i18n
                        .tr_with_args("list-partial-failure", &failed_args(failures)),
                    failures,
                ));
            }
            column.into()
        }
    };

    content.push(body).into()
}

fn entries(pane: &ListPane, focused: Option<usize>) -> Element<'_, Message> {
    let column = pane
        .entries
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XS), |column, (index, entry)| {
            column.push(
                button(Text::new(entry.label.as_str()).size(typography::BODY_LG))
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::LIST_ENTRY_HEIGHT))
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::focusable(
                        button_styles::list_entry,
                        focused == Some(index),
                    ))
                    .on_press(Message::Select(entry.id.clone())),
            )
        });

    scrollable(column).height(Length::Fill).into()
}

fn failed_args(failures: &[FileFailure]) -> [(&'static str, FluentValue<'static>); 1] {
    [("failed", FluentValue::from(failures.len()))]
}

fn failure_report<'a>(
    message: String,
    failures: &[FileFailure],
) -> Element<'a, Message> {
    failures
        .iter()
        .fold(
            ErrorDisplay::new(ErrorSeverity::Warning).message(message),
            |display, failure| display.details(format!("{}: {}", failure.source, failure.reason)),
        )
        .view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_message_becomes_select_event() {
        assert_eq!(
            update(&Message::Select("42".into())),
            Event::Select("42".into())
        );
    }

    #[test]
    fn failure_count_is_passed_to_translations() {
        let failures = vec![
            FileFailure {
                source: "a.json".into(),
                reason: "JSON data is not an array.".into(),
            },
            FileFailure {
                source: "b.json".into(),
                reason: "HTTP error! status: 404".into(),
            },
        ];
        let i18n = I18n::new(Some("en-US".into()), &Default::default());
        let message = i18n.tr_with_args("list-empty-all-failed", &failed_args(&failures));
        assert!(message.contains('2'), "{message}");
    }
}
