use inquest_types::{Answer, Error, Theme};

use crate::console::{Console, Key};
use crate::form::{Action, KeyMap, console_err};
use crate::render;

/// Yes/no confirmation.
///
/// A restricted input: `y`/`Y` and `n`/`N` commit a boolean immediately,
/// every other key is swallowed. No free text is ever accepted.
pub(crate) struct ConfirmForm {
    message: String,
    theme: Theme,
    keys: KeyMap,
}

impl ConfirmForm {
    pub(crate) fn new(message: String, theme: Theme) -> Self {
        let keys = KeyMap::new()
            .bind(Key::Char('y'), Action::Yes)
            .bind(Key::Char('Y'), Action::Yes)
            .bind(Key::Char('n'), Action::No)
            .bind(Key::Char('N'), Action::No);
        Self {
            message,
            theme,
            keys,
        }
    }

    pub(crate) fn collect<C: Console>(&mut self, console: &mut C) -> Result<Answer, Error> {
        loop {
            let frame = render::confirm(&self.message, None);
            console.render(&frame, &self.theme).map_err(console_err)?;

            let key = console.next_key().map_err(console_err)?;
            let answer = match self.keys.action(key) {
                Some(Action::Yes) => true,
                Some(Action::No) => false,
                _ => continue,
            };

            // Echo the committed answer before the screen is released.
            let echo = if answer { "y" } else { "n" };
            let frame = render::confirm(&self.message, Some(echo));
            console.render(&frame, &self.theme).map_err(console_err)?;
            return Ok(Answer::Bool(answer));
        }
    }
}
