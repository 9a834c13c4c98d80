use inquest_types::{Answer, Error, Theme};

use crate::console::{Console, Key};
use crate::form::{Action, KeyMap, console_err};
use crate::pipeline::Pipeline;
use crate::render;

/// Free-text entry.
///
/// Printable keys extend the buffer, backspace shortens it, enter
/// attempts the commit. The validator gates the commit: a rejection
/// shows its message below the input and keeps the buffer untouched.
pub(crate) struct InputForm {
    message: String,
    theme: Theme,
    keys: KeyMap,
    buffer: String,
    error: Option<String>,
}

impl InputForm {
    pub(crate) fn new(message: String, theme: Theme) -> Self {
        Self {
            message,
            theme,
            keys: KeyMap::new().bind(Key::Enter, Action::Commit),
            buffer: String::new(),
            error: None,
        }
    }

    pub(crate) fn collect<C: Console>(
        &mut self,
        console: &mut C,
        pipeline: &Pipeline,
    ) -> Result<Answer, Error> {
        loop {
            let frame = render::input(&self.message, &self.buffer, self.error.as_deref());
            console.render(&frame, &self.theme).map_err(console_err)?;

            let key = console.next_key().map_err(console_err)?;
            match self.keys.action(key) {
                Some(Action::Commit) => {
                    let candidate = Answer::String(self.buffer.clone());
                    match pipeline.check(&candidate).message() {
                        None => return Ok(candidate),
                        Some(message) => self.error = Some(message.to_string()),
                    }
                }
                _ => match key {
                    Key::Char(c) => {
                        self.buffer.push(c);
                        self.error = None;
                    }
                    Key::Backspace => {
                        self.buffer.pop();
                        self.error = None;
                    }
                    _ => {}
                },
            }
        }
    }
}
