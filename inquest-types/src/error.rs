/// Error type for questionnaire operations.
///
/// Specification errors are raised at pre-flight, before any screen is
/// drawn; `Console` wraps a display-backend failure that aborted the
/// batch mid-run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A question is missing a (non-empty) name.
    #[error("Every question needs to have a name")]
    UnnamedQuestion,

    /// Two questions share a name, compared case-insensitively.
    #[error("Question names must be unique, '{0}' appears more than once")]
    DuplicateNames(String),

    /// A question does not declare its widget kind.
    #[error("Question '{0}' must specify the kind of form to use")]
    MissingKind(String),

    /// A kind name that is not one of the recognized four.
    #[error("'{0}' is not a recognized form kind")]
    InvalidKind(String),

    /// A list-like question without any choices.
    #[error("Question '{0}' needs at least one choice")]
    MissingChoices(String),

    /// `values` and `choices` disagree in length.
    #[error("Question '{0}' has values and choices of different lengths")]
    MismatchedValues(String),

    /// Display-backend failure (I/O, interruption, terminal crash).
    #[error("Console error: {0}")]
    Console(#[from] anyhow::Error),
}

impl Error {
    /// Create a console error from any error type.
    pub fn console(err: impl Into<anyhow::Error>) -> Self {
        Self::Console(err.into())
    }

    /// Whether this is a specification error, detectable before any
    /// form runs.
    pub fn is_specification(&self) -> bool {
        !matches!(self, Self::Console(_))
    }
}
