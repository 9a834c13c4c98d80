use inquest_types::{Line, Theme};

/// A named key event delivered to a running form.
///
/// Display backends translate their raw input events into this closed
/// set; anything a form never reacts to need not be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Enter,
    Backspace,
    Char(char),
}

/// The display-backend contract consumed by running forms.
///
/// A form acquires the console with [`enter`](Console::enter) before its
/// widget loop, re-renders a full frame after every state transition, and
/// releases the console with [`leave`](Console::leave) on every exit path,
/// including errors. [`next_key`](Console::next_key) blocks until the
/// user presses a key the backend can translate.
///
/// The engine never touches raw terminal I/O directly; this trait is the
/// whole surface between the state machines and the outside world.
pub trait Console {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Acquire the screen for one form.
    fn enter(&mut self) -> Result<(), Self::Error>;

    /// Draw a full frame of styled lines, replacing the previous frame.
    fn render(&mut self, frame: &[Line], theme: &Theme) -> Result<(), Self::Error>;

    /// Block until the next translatable key press.
    fn next_key(&mut self) -> Result<Key, Self::Error>;

    /// Release the screen; the frame's final state is left on the
    /// terminal.
    fn leave(&mut self) -> Result<(), Self::Error>;
}
