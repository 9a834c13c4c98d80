use inquest_types::{Answer, Error, Theme};

use crate::console::{Console, Key};
use crate::form::{Action, KeyMap, console_err};
use crate::render;
use crate::selection::Selection;

const INSTRUCTION: &str = "(Use arrow keys)";

/// Single-select list.
///
/// Up/down move the cursor (saturating at the ends), enter commits the
/// value under the cursor. No validator ever runs here: the choices are
/// pre-constrained by whoever wrote the question, so there is nothing
/// to validate.
pub(crate) struct ListForm {
    message: String,
    choices: Vec<String>,
    values: Vec<Answer>,
    theme: Theme,
    keys: KeyMap,
    selection: Selection,
}

impl ListForm {
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
            .bind(Key::Enter, Action::Commit);
        Self {
            message,
            choices,
            values,
            theme,
            keys,
            selection,
        }
    }

    pub(crate) fn collect<C: Console>(&mut self, console: &mut C) -> Result<Answer, Error> {
        loop {
            let frame = render::choices(
                &self.message,
                INSTRUCTION,
                &self.choices,
                &self.selection,
                false,
                None,
            );
            console.render(&frame, &self.theme).map_err(console_err)?;

            let key = console.next_key().map_err(console_err)?;
            match self.keys.action(key) {
                Some(Action::MoveUp) => self.selection.move_up(),
                Some(Action::MoveDown) => self.selection.move_down(),
                Some(Action::Commit) => {
                    return Ok(self.values[self.selection.cursor()].clone());
                }
                _ => {}
            }
        }
    }
}
