//! Pure frame construction: `(form state) -> Vec<Line>`.
//!
//! Every widget loop recomputes its whole frame from current state and
//! hands it to the console; nothing here mutates shared rendering
//! structures.

use inquest_types::{Line, Role, Segment};

use crate::Selection;

pub(crate) const POINTER: &str = "\u{276F} ";
pub(crate) const NO_POINTER: &str = "  ";
pub(crate) const SELECTED: &str = "\u{25CF} ";
pub(crate) const UNSELECTED: &str = "\u{25CB} ";

/// The `[?] message (instructions)` line shared by all form kinds.
pub(crate) fn question(message: &str, instruction: Option<&str>) -> Line {
    let mut line = vec![
        Segment::new(Role::QuestionMark, "[?] "),
        Segment::new(Role::Question, message),
    ];
    if let Some(instruction) = instruction {
        line.push(Segment::new(Role::Instruction, format!(" {instruction}")));
    }
    line
}

/// Frame for a free-text form: question line with the buffer inline,
/// plus an error line when validation rejected the last commit attempt.
pub(crate) fn input(message: &str, buffer: &str, error: Option<&str>) -> Vec<Line> {
    let mut line = question(message, None);
    line.push(Segment::new(Role::Text, format!(" {buffer}")));
    let mut frame = vec![line];
    if let Some(error) = error {
        frame.push(vec![Segment::new(Role::Error, error)]);
    }
    frame
}

/// Frame for a confirm form: question line with the `(y/n)` hint and,
/// once committed, the echoed answer.
pub(crate) fn confirm(message: &str, echo: Option<&str>) -> Vec<Line> {
    let mut line = question(message, Some("(y/n)"));
    if let Some(echo) = echo {
        line.push(Segment::new(Role::Answer, format!(" {echo}")));
    }
    vec![line]
}

/// Frame for list and checkbox forms: question line, one line per
/// choice with the pointer on the cursor row (and a selector marker for
/// checkboxes), and a dedicated error region that only appears when a
/// commit was rejected.
pub(crate) fn choices(
    message: &str,
    instruction: &str,
    choices: &[String],
    selection: &Selection,
    checkbox: bool,
    error: Option<&str>,
) -> Vec<Line> {
    let mut frame = vec![question(message, Some(instruction))];
    for (idx, choice) in choices.iter().enumerate() {
        let pointer = if idx == selection.cursor() {
            POINTER
        } else {
            NO_POINTER
        };
        let mut line = vec![Segment::new(Role::Pointer, pointer)];
        if checkbox {
            let marker = if selection.is_selected(idx) {
                SELECTED
            } else {
                UNSELECTED
            };
            line.push(Segment::new(Role::Selector, marker));
        }
        line.push(Segment::new(Role::Text, choice.as_str()));
        frame.push(line);
    }
    if let Some(error) = error {
        frame.push(vec![Segment::new(Role::Error, error)]);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(frame: &[Line]) -> Vec<String> {
        frame
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn question_line_layout() {
        let line = question("Proceed?", Some("(y/n)"));
        let text: String = line.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(text, "[?] Proceed? (y/n)");
    }

    #[test]
    fn pointer_follows_the_cursor() {
        let choices_list = vec!["A".to_string(), "B".to_string()];
        let mut selection = Selection::new(2);
        selection.move_down();

        let frame = choices("pick", "(Use arrow keys)", &choices_list, &selection, false, None);
        let lines = text_of(&frame);
        assert_eq!(lines[1], "  A");
        assert_eq!(lines[2], "\u{276F} B");
    }

    #[test]
    fn error_region_only_appears_on_error() {
        let choices_list = vec!["A".to_string()];
        let selection = Selection::new(1);

        let clean = choices("pick", "", &choices_list, &selection, true, None);
        assert_eq!(clean.len(), 2);

        let failed = choices("pick", "", &choices_list, &selection, true, Some("nope"));
        assert_eq!(failed.len(), 3);
        assert_eq!(failed[2][0].role, Role::Error);
    }
}
