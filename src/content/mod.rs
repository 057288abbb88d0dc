// SPDX-License-Identifier: MPL-2.0
//! Reading comprehension content: the data model, where it is read from,
//! and how the catalog is assembled.
//!
//! Content files are external data with a fixed JSON schema. Entries are read
//! leniently from `serde_json::Value` so that one badly shaped field only
//! affects the view that displays it, never the rest of the catalog.

pub mod loader;
pub mod source;

pub use loader::{load, Catalog, EmptyReason, FileFailure};
pub use source::{ContentRoot, Fetch, FetchError};

use serde::Deserialize;
use serde_json::Value;

/// Index file listing all content-file locations to load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(rename = "dataFiles")]
    pub data_files: Vec<String>,
}

/// How the `content` string of an item is to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    /// Prose, displayed as plain text lines.
    Text,
    /// A relative path to a local image.
    Picture,
    /// Anything else; shown as an error when the item is opened.
    Unknown(String),
}

impl ContentKind {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(raw)) => match raw.as_str() {
                "text" => ContentKind::Text,
                "picture" => ContentKind::Picture,
                other => ContentKind::Unknown(other.to_string()),
            },
            Some(other) => ContentKind::Unknown(other.to_string()),
            None => ContentKind::Unknown("undefined".to_string()),
        }
    }
}

/// One quiz prompt with its correct-answer text.
///
/// Both fields are optional because the display has to cope with malformed
/// entries; see [`Question::prompt`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Question {
    pub question_text: Option<String>,
    pub correct_answer: Option<String>,
}

impl Question {
    pub fn new(question_text: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            question_text: Some(question_text.into()),
            correct_answer: Some(correct_answer.into()),
        }
    }

    fn from_value(value: &Value) -> Self {
        Self {
            question_text: string_field(value, "questionText"),
            correct_answer: string_field(value, "correctAnswer"),
        }
    }

    /// Returns `(question_text, correct_answer)` when both are present strings.
    pub fn prompt(&self) -> Option<(&str, &str)> {
        Some((
            self.question_text.as_deref()?,
            self.correct_answer.as_deref()?,
        ))
    }
}

/// One comprehension exercise: a passage plus optional questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub kind: ContentKind,
    /// `None` when the JSON value was missing or not a string.
    pub content: Option<String>,
    pub questions: Vec<Question>,
}

impl ContentItem {
    /// Builds an item from one entry of a content file.
    ///
    /// Returns `None` when `id`, `title` or `source` is missing, empty or not a
    /// string. A missing or non-array `questions` field becomes an empty list.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = required_field(value, "id")?;
        let title = required_field(value, "title")?;
        let source = required_field(value, "source")?;

        let questions = match value.get("questions") {
            Some(Value::Array(entries)) => entries.iter().map(Question::from_value).collect(),
            _ => {
                tracing::warn!(%id, %title, "Comprehension is missing a valid 'questions' array");
                Vec::new()
            }
        };

        Some(Self {
            kind: ContentKind::from_value(value.get("type")),
            content: string_field(value, "content"),
            id,
            title,
            source,
            questions,
        })
    }

    /// Label shown in the list view.
    pub fn list_label(&self) -> String {
        format!("{} ({})", self.title, self.source)
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn required_field(value: &Value, key: &str) -> Option<String> {
    string_field(value, key).filter(|field| !field.is_empty())
}
