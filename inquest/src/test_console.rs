//! Scripted console for testing questionnaires without a terminal.
//!
//! `TestConsole` feeds a pre-defined key sequence to running forms and
//! records every rendered frame, so tests can drive widgets end to end
//! and assert on what the user would have seen.
//!
//! # Example
//!
//! ```
//! use inquest::{Key, Question, TestConsole, prompt_one};
//!
//! let question = Question::list("color", "Pick a color")
//!     .with_choices(["Red", "Green", "Blue"]);
//!
//! let mut console = TestConsole::new().with_keys([Key::Down, Key::Enter]);
//! let answers = prompt_one(question, &mut console).unwrap();
//! assert_eq!(answers.get_str("color"), Some("Green"));
//! ```

use std::collections::VecDeque;

use inquest_types::{Line, Theme};

use crate::console::{Console, Key};

/// A console that replays a scripted key sequence.
#[derive(Debug, Clone, Default)]
pub struct TestConsole {
    keys: VecDeque<Key>,
    served: usize,
    frames: Vec<Vec<Line>>,
    enters: usize,
    leaves: usize,
}

/// Error type for `TestConsole`.
#[derive(Debug, thiserror::Error)]
pub enum TestConsoleError {
    /// The form asked for more keys than the script provided.
    #[error("key script exhausted after {0} keys")]
    ScriptExhausted(usize),
}

impl TestConsole {
    /// Create a console with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append keys to the script.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Append one `Char` key per character of `text`.
    pub fn with_text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::Char));
        self
    }

    /// Append `text` followed by enter, like a user typing a line.
    pub fn with_line(self, text: &str) -> Self {
        self.with_text(text).with_keys([Key::Enter])
    }

    /// Every frame rendered so far, oldest first.
    pub fn frames(&self) -> &[Vec<Line>] {
        &self.frames
    }

    /// The most recent frame, flattened to plain text with lines joined
    /// by newlines.
    pub fn last_frame_text(&self) -> String {
        self.frames.last().map(|f| Self::frame_text(f)).unwrap_or_default()
    }

    /// Flatten one frame to plain text.
    pub fn frame_text(frame: &[Line]) -> String {
        frame
            .iter()
            .map(|line| {
                line.iter()
                    .map(|segment| segment.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// How many times the screen was acquired.
    pub fn enters(&self) -> usize {
        self.enters
    }

    /// How many times the screen was released.
    pub fn leaves(&self) -> usize {
        self.leaves
    }

    /// Whether every acquire was matched by a release.
    pub fn screen_balanced(&self) -> bool {
        self.enters == self.leaves
    }
}

impl Console for TestConsole {
    type Error = TestConsoleError;

    fn enter(&mut self) -> Result<(), Self::Error> {
        self.enters += 1;
        Ok(())
    }

    fn render(&mut self, frame: &[Line], _theme: &Theme) -> Result<(), Self::Error> {
        self.frames.push(frame.to_vec());
        Ok(())
    }

    fn next_key(&mut self) -> Result<Key, Self::Error> {
        match self.keys.pop_front() {
            Some(key) => {
                self.served += 1;
                Ok(key)
            }
            None => Err(TestConsoleError::ScriptExhausted(self.served)),
        }
    }

    fn leave(&mut self) -> Result<(), Self::Error> {
        self.leaves += 1;
        Ok(())
    }
}
