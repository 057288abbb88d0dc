// SPDX-License-Identifier: MPL-2.0
//! Render instructions produced by the session controller.
//!
//! These are plain data: the UI turns them into widgets, tests compare them
//! directly. Nothing here holds a reference into the session.

use crate::content::{ContentItem, ContentKind, Question};

/// What the UI should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    List(ListPane),
    Reading(ReadingPane),
    Question(QuestionPane),
    /// A select referenced an id that is not in the catalog. The list stays
    /// visible and the failure is reported to the user.
    SelectionFailed { id: String, list: ListPane },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPane {
    pub entries: Vec<ListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: String,
    pub label: String,
}

impl ListPane {
    pub(crate) fn from_items(items: &[ContentItem]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| ListEntry {
                    id: item.id.clone(),
                    label: item.list_label(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingPane {
    pub title: String,
    pub body: PassageBody,
    pub can_start_questions: bool,
}

/// How the passage of the selected item is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassageBody {
    /// Plain text, one entry per line. Never interpreted as markup.
    Lines(Vec<String>),
    /// A validated relative image path, still to be fetched.
    Picture { path: String },
    InvalidText,
    InvalidPicture { path: Option<String> },
    UnknownKind(String),
}

impl PassageBody {
    pub(crate) fn for_item(item: &ContentItem) -> Self {
        match (&item.kind, item.content.as_deref()) {
            (ContentKind::Text, Some(text)) => {
                PassageBody::Lines(text.split('\n').map(str::to_owned).collect())
            }
            (ContentKind::Text, None) => {
                tracing::error!(id = %item.id, "Invalid text content");
                PassageBody::InvalidText
            }
            (ContentKind::Picture, content) => match content.and_then(picture_path) {
                Some(path) => PassageBody::Picture {
                    path: path.to_string(),
                },
                None => {
                    tracing::error!(id = %item.id, path = ?content, "Invalid image path");
                    PassageBody::InvalidPicture {
                        path: content.map(str::to_owned),
                    }
                }
            },
            (ContentKind::Unknown(kind), _) => {
                tracing::error!(id = %item.id, %kind, "Unknown comprehension type");
                PassageBody::UnknownKind(kind.clone())
            }
        }
    }
}

/// Accepts only non-empty relative paths: no absolute URL, no root-relative path.
pub fn picture_path(raw: &str) -> Option<&str> {
    let path = raw.trim();
    if path.is_empty() || path.starts_with("http") || path.starts_with('/') {
        None
    } else {
        Some(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPane {
    /// 1-based position of the question.
    pub number: usize,
    pub total: usize,
    pub body: QuestionBody,
    pub answer_revealed: bool,
    pub can_reveal: bool,
    pub has_previous: bool,
    /// Next is replaced by Finish on the last question.
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    Prompt { text: String, answer: String },
    /// Text or answer missing; navigation still works.
    Malformed,
}

impl QuestionBody {
    pub(crate) fn for_question(question: &Question) -> Self {
        match question.prompt() {
            Some((text, answer)) => QuestionBody::Prompt {
                text: text.to_string(),
                answer: answer.to_string(),
            },
            None => QuestionBody::Malformed,
        }
    }
}
