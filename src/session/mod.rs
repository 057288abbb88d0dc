// SPDX-License-Identifier: MPL-2.0
//! Navigation state for one reading session: List, Reading, Question.
//!
//! The session is an explicit value. Every user action becomes a [`Command`]
//! passed to [`Session::dispatch`], which mutates the session synchronously
//! and returns the [`Render`] instruction for the resulting state. Commands
//! that make no sense in the current view leave the state untouched.

pub mod render;

pub use render::{
    picture_path, ListEntry, ListPane, PassageBody, QuestionBody, QuestionPane, ReadingPane,
    Render,
};

use crate::content::ContentItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Reading,
    Question,
}

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    StartQuestions,
    NextQuestion,
    PreviousQuestion,
    RevealAnswer,
    Finish,
    Back,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    items: Vec<ContentItem>,
    view: View,
    /// Index into `items`; only set while Reading or Question is active.
    current: Option<usize>,
    question_index: usize,
    answer_revealed: bool,
}

impl Session {
    /// Starts a session on the list view over a freshly loaded catalog.
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn current_item(&self) -> Option<&ContentItem> {
        self.current.and_then(|index| self.items.get(index))
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn answer_revealed(&self) -> bool {
        self.answer_revealed
    }

    /// Applies `command` and returns what to show next.
    pub fn dispatch(&mut self, command: Command) -> Render {
        match command {
            Command::Select(id) => return self.select(id),
            Command::StartQuestions => {
                if self.view == View::Reading && self.question_count() > 0 {
                    self.view = View::Question;
                    self.show_question(0);
                }
            }
            Command::NextQuestion => {
                if self.view == View::Question && self.question_index + 1 < self.question_count() {
                    self.show_question(self.question_index + 1);
                }
            }
            Command::PreviousQuestion => {
                if self.view == View::Question && self.question_index > 0 {
                    self.show_question(self.question_index - 1);
                }
            }
            Command::RevealAnswer => {
                if self.view == View::Question && self.current_prompt_is_valid() {
                    self.answer_revealed = true;
                }
            }
            Command::Finish => {
                if self.view == View::Question {
                    self.return_to_list();
                }
            }
            Command::Back => {
                if self.view != View::List {
                    self.return_to_list();
                }
            }
        }
        self.render()
    }

    /// Recomputes the render instruction for the current state.
    pub fn render(&self) -> Render {
        match (self.view, self.current_item()) {
            (View::Reading, Some(item)) => Render::Reading(ReadingPane {
                title: item.title.clone(),
                body: PassageBody::for_item(item),
                can_start_questions: item.has_questions(),
            }),
            (View::Question, Some(item)) => {
                let total = item.questions.len();
                let body = item
                    .questions
                    .get(self.question_index)
                    .map(QuestionBody::for_question)
                    .unwrap_or(QuestionBody::Malformed);
                let can_reveal = matches!(body, QuestionBody::Prompt { .. }) && !self.answer_revealed;
                Render::Question(QuestionPane {
                    number: self.question_index + 1,
                    total,
                    body,
                    answer_revealed: self.answer_revealed,
                    can_reveal,
                    has_previous: self.question_index > 0,
                    is_last: self.question_index + 1 >= total,
                })
            }
            _ => Render::List(ListPane::from_items(&self.items)),
        }
    }

    fn select(&mut self, id: String) -> Render {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.current = Some(index);
                self.view = View::Reading;
                self.question_index = 0;
                self.answer_revealed = false;
                self.render()
            }
            None => {
                tracing::error!(%id, "Comprehension not found");
                self.return_to_list();
                Render::SelectionFailed {
                    id,
                    list: ListPane::from_items(&self.items),
                }
            }
        }
    }

    fn show_question(&mut self, index: usize) {
        self.question_index = index;
        self.answer_revealed = false;
        if !self.current_prompt_is_valid() {
            tracing::error!(
                id = ?self.current_item().map(|item| item.id.as_str()),
                index,
                "Invalid question structure"
            );
        }
    }

    fn return_to_list(&mut self) {
        self.view = View::List;
        self.current = None;
        self.question_index = 0;
        self.answer_revealed = false;
    }

    fn question_count(&self) -> usize {
        self.current_item().map_or(0, |item| item.questions.len())
    }

    fn current_prompt_is_valid(&self) -> bool {
        self.current_item()
            .and_then(|item| item.questions.get(self.question_index))
            .is_some_and(|question| question.prompt().is_some())
    }
}
