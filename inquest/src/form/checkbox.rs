use inquest_types::{Answer, Error, Theme};

use crate::console::{Console, Key};
use crate::form::{Action, KeyMap, console_err};
use crate::pipeline::Pipeline;
use crate::render;
use crate::selection::Selection;

const INSTRUCTION: &str =
    "(<up>, <down> to move, <space> to select, <a> to select all, <i> to invert all)";

/// Multi-select checklist.
///
/// Space toggles the choice under the cursor, `a` selects everything,
/// `i` inverts the selection. Enter resolves the selected values in
/// ascending index order and validates the whole list; a rejection
/// shows its message in the error region and leaves cursor and
/// selection exactly as they were.
pub(crate) struct CheckboxForm {
    message: String,
    choices: Vec<String>,
    values: Vec<Answer>,
    theme: Theme,
    keys: KeyMap,
    selection: Selection,
    error: Option<String>,
}

impl CheckboxForm {
    pub(crate) fn new(
        message: String,
        choices: Vec<String>,
        values: Vec<Answer>,
        theme: Theme,
    ) -> Self {
        let selection = Selection::new(choices.len());
        let keys = KeyMap::new()
            .bind(Key::Up, Action::MoveUp)
            .bind(Key::Down, Action::MoveDown)
            .bind(Key::Char(' '), Action::Toggle)
            .bind(Key::Char('a'), Action::SelectAll)
            .bind(Key::Char('i'), Action::InvertAll)
            .bind(Key::Enter, Action::Commit);
        Self {
            message,
            choices,
            values,
            theme,
            keys,
            selection,
            error: None,
        }
    }

    fn resolve_selection(&self) -> Answer {
        Answer::List(
            self.selection
                .selected_indices()
                .map(|idx| self.values[idx].clone())
                .collect(),
        )
    }

    pub(crate) fn collect<C: Console>(
        &mut self,
        console: &mut C,
        pipeline: &Pipeline,
    ) -> Result<Answer, Error> {
        loop {
            let frame = render::choices(
                &self.message,
                INSTRUCTION,
                &self.choices,
                &self.selection,
                true,
                self.error.as_deref(),
            );
            console.render(&frame, &self.theme).map_err(console_err)?;

            let key = console.next_key().map_err(console_err)?;
            match self.keys.action(key) {
                Some(Action::MoveUp) => self.selection.move_up(),
                Some(Action::MoveDown) => self.selection.move_down(),
                Some(Action::Toggle) => self.selection.toggle(),
                Some(Action::SelectAll) => self.selection.select_all(),
                Some(Action::InvertAll) => self.selection.invert_all(),
                Some(Action::Commit) => {
                    let candidate = self.resolve_selection();
                    match pipeline.check(&candidate).message() {
                        None => return Ok(candidate),
                        Some(message) => self.error = Some(message.to_string()),
                    }
                }
                _ => {}
            }
        }
    }
}
