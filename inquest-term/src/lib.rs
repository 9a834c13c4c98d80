//! # inquest-term
//!
//! Crossterm display backend for the inquest questionnaire engine.
//!
//! [`TermConsole`] renders form frames inline (no alternate screen) and
//! captures keys in raw mode, translating them into the engine's
//! [`Key`](inquest::Key) events.
//!
//! # Example
//!
//! ```no_run
//! use inquest::{Question, prompt};
//! use inquest_term::TermConsole;
//!
//! fn main() -> anyhow::Result<()> {
//!     let questions = [
//!         Question::input("name", "What is your name?"),
//!         Question::confirm("sure", "Are you sure?"),
//!     ];
//!     let mut console = TermConsole::new();
//!     let answers = prompt(questions, &mut console)?;
//!     println!("Hello, {}!", answers.get_str("name").unwrap_or("stranger"));
//!     Ok(())
//! }
//! ```

mod console;

pub use console::{TermConsole, TermError};
