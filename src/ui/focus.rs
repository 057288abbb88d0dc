// SPDX-License-Identifier: MPL-2.0
//! Keyboard navigation across the three views.
//!
//! Arrow keys move a focus marker that the views draw as a ring around the
//! focused button or list entry; Enter activates it. Only controls that are
//! visible and enabled in the current render can hold focus. Movement is
//! linear and stops at both ends.

use crate::session::{QuestionPane, ReadingPane, Render};

/// A focusable button of the reading or question view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    StartQuestions,
    Back,
    Previous,
    ShowAnswer,
    Next,
    Finish,
}

/// Navigation keys the reader responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Press the focused control.
    Activate(Control),
    /// Open the list entry at this index.
    OpenEntry(usize),
}

/// Reading controls in focus order.
pub fn reading_controls(pane: &ReadingPane) -> Vec<Control> {
    let mut controls = Vec::with_capacity(2);
    if pane.can_start_questions {
        controls.push(Control::StartQuestions);
    }
    controls.push(Control::Back);
    controls
}

/// Question controls in focus order: Previous, Show Answer, Next or Finish.
pub fn question_controls(pane: &QuestionPane) -> Vec<Control> {
    let mut controls = Vec::with_capacity(3);
    if pane.has_previous {
        controls.push(Control::Previous);
    }
    if pane.can_reveal {
        controls.push(Control::ShowAnswer);
    }
    controls.push(if pane.is_last {
        Control::Finish
    } else {
        Control::Next
    });
    controls
}

/// Current keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    list_entry: Option<usize>,
    control: Option<Control>,
}

impl Focus {
    pub fn list_entry(&self) -> Option<usize> {
        self.list_entry
    }

    pub fn control(&self) -> Option<Control> {
        self.control
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.control == Some(control)
    }

    /// Places focus for a freshly shown view or question.
    ///
    /// The list starts unfocused. Reading focuses its first control and a
    /// question focuses Show Answer when it is available.
    pub fn reset(&mut self, render: &Render) {
        *self = Self::default();
        match render {
            Render::List(_) | Render::SelectionFailed { .. } => {}
            Render::Reading(pane) => self.control = reading_controls(pane).first().copied(),
            Render::Question(pane) => {
                let controls = question_controls(pane);
                self.control = controls
                    .iter()
                    .copied()
                    .find(|control| *control == Control::ShowAnswer)
                    .or_else(|| controls.first().copied());
            }
        }
    }

    /// Moves focus to the advance action once an answer is shown.
    pub fn after_reveal(&mut self, pane: &QuestionPane) {
        self.control = Some(if pane.is_last {
            Control::Finish
        } else {
            Control::Next
        });
    }

    /// Handles one key press against what is on screen.
    pub fn handle(&mut self, key: NavKey, render: &Render) -> Action {
        match render {
            Render::List(list) | Render::SelectionFailed { list, .. } => {
                self.handle_list(key, list.entries.len())
            }
            Render::Reading(pane) => self.handle_controls(key, &reading_controls(pane)),
            Render::Question(pane) => self.handle_controls(key, &question_controls(pane)),
        }
    }

    fn handle_list(&mut self, key: NavKey, len: usize) -> Action {
        if len == 0 {
            self.list_entry = None;
            return Action::None;
        }
        match (key, self.list_entry.filter(|index| *index < len)) {
            (NavKey::Up | NavKey::Down, None) => self.list_entry = Some(0),
            (NavKey::Down, Some(index)) if index + 1 < len => self.list_entry = Some(index + 1),
            (NavKey::Up, Some(index)) if index > 0 => self.list_entry = Some(index - 1),
            (NavKey::Enter, Some(index)) => return Action::OpenEntry(index),
            _ => {}
        }
        Action::None
    }

    fn handle_controls(&mut self, key: NavKey, controls: &[Control]) -> Action {
        let position = self
            .control
            .and_then(|focused| controls.iter().position(|control| *control == focused));

        match (key, position) {
            // Focus was lost (the focused control became disabled).
            (NavKey::Left | NavKey::Right, None) => self.control = controls.first().copied(),
            (NavKey::Right, Some(index)) if index + 1 < controls.len() => {
                self.control = Some(controls[index + 1]);
            }
            (NavKey::Left, Some(index)) if index > 0 => self.control = Some(controls[index - 1]),
            (NavKey::Enter, Some(index)) => return Action::Activate(controls[index]),
            _ => {}
        }
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ListEntry, ListPane, PassageBody, QuestionBody};

    fn list(len: usize) -> Render {
        Render::List(ListPane {
            entries: (0..len)
                .map(|i| ListEntry {
                    id: i.to_string(),
                    label: format!("Entry {i}"),
                })
                .collect(),
        })
    }

    fn reading(can_start_questions: bool) -> Render {
        Render::Reading(ReadingPane {
            title: "T".into(),
            body: PassageBody::Lines(vec!["x".into()]),
            can_start_questions,
        })
    }

    fn question(number: usize, total: usize, revealed: bool) -> QuestionPane {
        QuestionPane {
            number,
            total,
            body: QuestionBody::Prompt {
                text: "Q".into(),
                answer: "A".into(),
            },
            answer_revealed: revealed,
            can_reveal: !revealed,
            has_previous: number > 1,
            is_last: number == total,
        }
    }

    #[test]
    fn list_arrows_focus_first_entry_then_move_without_wrapping() {
        let render = list(3);
        let mut focus = Focus::default();

        focus.handle(NavKey::Up, &render);
        assert_eq!(focus.list_entry(), Some(0));
        focus.handle(NavKey::Up, &render);
        assert_eq!(focus.list_entry(), Some(0));

        focus.handle(NavKey::Down, &render);
        focus.handle(NavKey::Down, &render);
        focus.handle(NavKey::Down, &render);
        assert_eq!(focus.list_entry(), Some(2));

        assert_eq!(focus.handle(NavKey::Enter, &render), Action::OpenEntry(2));
    }

    #[test]
    fn enter_without_focus_does_nothing() {
        let mut focus = Focus::default();
        assert_eq!(focus.handle(NavKey::Enter, &list(2)), Action::None);
        assert_eq!(focus.handle(NavKey::Down, &list(0)), Action::None);
        assert_eq!(focus.list_entry(), None);
    }

    #[test]
    fn reading_focus_starts_on_first_enabled_control() {
        let mut focus = Focus::default();
        focus.reset(&reading(true));
        assert_eq!(focus.control(), Some(Control::StartQuestions));

        focus.reset(&reading(false));
        assert_eq!(focus.control(), Some(Control::Back));
        assert_eq!(focus.handle(NavKey::Left, &reading(false)), Action::None);
        assert_eq!(
            focus.handle(NavKey::Enter, &reading(false)),
            Action::Activate(Control::Back)
        );
    }

    #[test]
    fn question_controls_skip_hidden_and_disabled_buttons() {
        assert_eq!(
            question_controls(&question(1, 3, false)),
            vec![Control::ShowAnswer, Control::Next]
        );
        assert_eq!(
            question_controls(&question(2, 3, true)),
            vec![Control::Previous, Control::Next]
        );
        assert_eq!(
            question_controls(&question(3, 3, false)),
            vec![Control::Previous, Control::ShowAnswer, Control::Finish]
        );
    }

    #[test]
    fn question_focus_moves_linearly() {
        let pane = question(2, 3, false);
        let render = Render::Question(pane.clone());
        let mut focus = Focus::default();
        focus.reset(&render);
        assert_eq!(focus.control(), Some(Control::ShowAnswer));

        focus.handle(NavKey::Right, &render);
        assert_eq!(focus.control(), Some(Control::Next));
        focus.handle(NavKey::Right, &render);
        assert_eq!(focus.control(), Some(Control::Next));

        focus.handle(NavKey::Left, &render);
        focus.handle(NavKey::Left, &render);
        focus.handle(NavKey::Left, &render);
        assert_eq!(focus.control(), Some(Control::Previous));
    }

    #[test]
    fn reveal_moves_focus_to_the_advance_action() {
        let mut focus = Focus::default();
        focus.after_reveal(&question(1, 2, true));
        assert_eq!(focus.control(), Some(Control::Next));
        focus.after_reveal(&question(2, 2, true));
        assert_eq!(focus.control(), Some(Control::Finish));
    }

    #[test]
    fn lost_focus_is_recovered_by_arrows() {
        let render = Render::Question(question(1, 2, true));
        let mut focus = Focus::default();
        focus.control = Some(Control::ShowAnswer);

        assert_eq!(focus.handle(NavKey::Enter, &render), Action::None);
        focus.handle(NavKey::Right, &render);
        assert_eq!(focus.control(), Some(Control::Next));
    }

    #[test]
    fn reset_clears_list_focus() {
        let mut focus = Focus::default();
        focus.handle(NavKey::Down, &list(2));
        focus.reset(&reading(true));
        assert_eq!(focus.list_entry(), None);
        focus.reset(&list(2));
        assert_eq!(focus, Focus::default());
    }
}
