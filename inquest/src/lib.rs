//! # inquest
//!
//! An interactive command-line questionnaire engine. Questions are
//! described declaratively, rendered as the matching widget (free text,
//! yes/no, single-select list, multi-select checkbox), and the collected
//! answers come back as one ordered map.
//!
//! The engine is display-backend-agnostic: widgets talk to the terminal
//! through the narrow [`Console`] trait. `inquest-term` provides the
//! crossterm implementation; [`TestConsole`] scripts key presses for
//! tests.
//!
//! ## Usage
//!
//! ```ignore
//! use inquest::{prompt, Question};
//! use inquest_term::TermConsole;
//!
//! let questions = [
//!     Question::input("name", "What is your name?"),
//!     Question::confirm("likes_rust", "Do you like Rust?"),
//!     Question::list("color", "Pick a color")
//!         .with_choices(["Red", "Green", "Blue"]),
//! ];
//!
//! let mut console = TermConsole::new();
//! let answers = prompt(questions, &mut console)?;
//! println!("Hello, {}!", answers.get_str("name").unwrap_or("stranger"));
//! # Ok::<(), inquest::Error>(())
//! ```

// Re-export all types from inquest-types
pub use inquest_types::*;

mod console;
pub use console::{Console, Key};

mod pipeline;
pub use pipeline::Pipeline;

mod selection;
pub use selection::Selection;

mod form;
pub use form::Form;

pub(crate) mod render;

mod prompt;
pub use prompt::{prompt, prompt_one};

// Scripted console for testing questionnaires without a terminal
mod test_console;
pub use test_console::{TestConsole, TestConsoleError};
