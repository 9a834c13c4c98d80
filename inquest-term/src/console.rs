use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use inquest::{Console, Key, Line, Theme};

/// Error type for the terminal console.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The user pressed Ctrl+C while a form was running.
    #[error("Interrupted by user")]
    Interrupted,
}

/// Inline terminal console over crossterm.
///
/// Frames are drawn in place below the shell prompt: each render moves
/// back over the previously drawn lines, clears them, and prints the
/// new frame with the theme's style per segment role. Raw mode is
/// enabled while a form holds the screen and always disabled again when
/// the form releases it.
#[derive(Debug, Default)]
pub struct TermConsole {
    out: Option<StdoutState>,
}

#[derive(Debug)]
struct StdoutState {
    out: Stdout,
    drawn_lines: u16,
}

impl TermConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&mut self) -> Result<&mut StdoutState, TermError> {
        self.out.as_mut().ok_or_else(|| {
            TermError::Io(io::Error::other("render outside an enter/leave session"))
        })
    }
}

impl Console for TermConsole {
    type Error = TermError;

    fn enter(&mut self) -> Result<(), Self::Error> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, cursor::Hide)?;
        self.out = Some(StdoutState {
            out,
            drawn_lines: 0,
        });
        tracing::debug!("screen acquired");
        Ok(())
    }

    fn render(&mut self, frame: &[Line], theme: &Theme) -> Result<(), Self::Error> {
        let state = self.state()?;

        if state.drawn_lines > 0 {
            queue!(state.out, cursor::MoveToPreviousLine(state.drawn_lines))?;
        } else {
            queue!(state.out, cursor::MoveToColumn(0))?;
        }
        queue!(state.out, Clear(ClearType::FromCursorDown))?;

        for line in frame {
            for segment in line {
                let style = theme.style(segment.role);
                if let Some(fg) = style.fg {
                    queue!(state.out, SetForegroundColor(fg))?;
                }
                if let Some(bg) = style.bg {
                    queue!(state.out, SetBackgroundColor(bg))?;
                }
                if style.bold {
                    queue!(state.out, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    state.out,
                    Print(segment.text.as_str()),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
            queue!(state.out, Print("\r\n"))?;
        }
        state.out.flush()?;
        state.drawn_lines = frame.len() as u16;
        Ok(())
    }

    fn next_key(&mut self) -> Result<Key, Self::Error> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Err(TermError::Interrupted);
            }
            let mapped = match key.code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Enter => Key::Enter,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Char(c) => Key::Char(c),
                // Keys no form reacts to are not surfaced at all.
                _ => continue,
            };
            return Ok(mapped);
        }
    }

    fn leave(&mut self) -> Result<(), Self::Error> {
        if let Some(mut state) = self.out.take() {
            execute!(state.out, cursor::Show)?;
            terminal::disable_raw_mode()?;
            tracing::debug!("screen released");
        }
        Ok(())
    }
}
