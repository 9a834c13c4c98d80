//! Core types for the inquest questionnaire engine.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Question` and `Kind` - Individual questions and their widget families
//! - `Answer` and `Answers` - Collected values and the ordered result map
//! - `Validation` - The three-way validator verdict
//! - `Theme`, `Role`, `Segment` - Styled output handed to a display backend
//! - `Error` - Specification and runtime failures

mod answer;
pub use answer::Answer;

mod answers;
pub use answers::Answers;

mod question;
pub use question::{Condition, Kind, Question, Transform, Validator};

mod validate;
pub use validate::Validation;

mod style;
pub use style::{Line, Role, Segment, TextStyle, Theme};

mod error;
pub use error::Error;
