// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screen messages become session commands here. Every command goes through
//! [`dispatch`], which refreshes the render instruction, keyboard focus and
//! the passage picture in one place.

use super::Message;
use crate::content::ContentRoot;
use crate::session::{Command, PassageBody, Render, Session};
use crate::ui::components::picture::{self, Picture};
use crate::ui::focus::{Action, Control, Focus, NavKey};
use crate::ui::list::{self, Event as ListEvent};
use crate::ui::question::{self, Event as QuestionEvent};
use crate::ui::reading::{self, Event as ReadingEvent};
use iced::Task;

/// Mutable view of the application state touched by navigation.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub render: &'a mut Render,
    pub focus: &'a mut Focus,
    pub selection_failed: &'a mut bool,
    pub picture: &'a mut Option<Picture>,
    pub next_picture_request: &'a mut u64,
    pub root: &'a ContentRoot,
}

pub fn handle_list_message(ctx: &mut UpdateContext<'_>, message: &list::Message) -> Task<Message> {
    match list::update(message) {
        ListEvent::Select(id) => dispatch(ctx, Command::Select(id)),
    }
}

pub fn handle_reading_message(
    ctx: &mut UpdateContext<'_>,
    message: &reading::Message,
) -> Task<Message> {
    let command = match reading::update(message) {
        ReadingEvent::StartQuestions => Command::StartQuestions,
        ReadingEvent::Back => Command::Back,
    };
    dispatch(ctx, command)
}

pub fn handle_question_message(
    ctx: &mut UpdateContext<'_>,
    message: &question::Message,
) -> Task<Message> {
    let command = match question::update(message) {
        QuestionEvent::Previous => Command::PreviousQuestion,
        QuestionEvent::ShowAnswer => Command::RevealAnswer,
        QuestionEvent::Next => Command::NextQuestion,
        QuestionEvent::Finish => Command::Finish,
        QuestionEvent::Back => Command::Back,
    };
    dispatch(ctx, command)
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, key: NavKey) -> Task<Message> {
    match ctx.focus.handle(key, ctx.render) {
        Action::None => Task::none(),
        Action::Activate(control) => dispatch(ctx, command_for(control)),
        Action::OpenEntry(index) => {
            let id = match &*ctx.render {
                Render::List(list) | Render::SelectionFailed { list, .. } => {
                    list.entries.get(index).map(|entry| entry.id.clone())
                }
                _ => None,
            };
            match id {
                Some(id) => dispatch(ctx, Command::Select(id)),
                None => Task::none(),
            }
        }
    }
}

fn command_for(control: Control) -> Command {
    match control {
        Control::StartQuestions => Command::StartQuestions,
        Control::Back => Command::Back,
        Control::Previous => Command::PreviousQuestion,
        Control::ShowAnswer => Command::RevealAnswer,
        Control::Next => Command::NextQuestion,
        Control::Finish => Command::Finish,
    }
}

/// Runs `command` against the session and refreshes everything derived from it.
pub fn dispatch(ctx: &mut UpdateContext<'_>, command: Command) -> Task<Message> {
    tracing::debug!(?command, "Dispatching");
    let reveal = command == Command::RevealAnswer;
    let select = matches!(command, Command::Select(_));

    *ctx.render = ctx.session.dispatch(command);
    *ctx.selection_failed = matches!(ctx.render, Render::SelectionFailed { .. });

    match (&*ctx.render, reveal) {
        (Render::Question(pane), true) if pane.answer_revealed => ctx.focus.after_reveal(pane),
        (render, _) => ctx.focus.reset(render),
    }

    sync_picture(ctx, select)
}

/// Starts loading the passage picture on entry to a picture passage and drops
/// it when the reading view is left.
fn sync_picture(ctx: &mut UpdateContext<'_>, entered: bool) -> Task<Message> {
    let path = match &*ctx.render {
        Render::Reading(pane) => match &pane.body {
            PassageBody::Picture { path } => Some(path.clone()),
            _ => None,
        },
        _ => None,
    };

    let Some(path) = path else {
        *ctx.picture = None;
        return Task::none();
    };
    if !entered && ctx.picture.as_ref().is_some_and(|current| current.path == path) {
        return Task::none();
    }

    *ctx.next_picture_request += 1;
    let request_id = *ctx.next_picture_request;
    *ctx.picture = Some(Picture::loading(request_id, path.clone()));

    let root = ctx.root.clone();
    Task::perform(picture::load(root, request_id, path), |(request_id, result)| {
        Message::PictureLoaded { request_id, result }
    })
}
