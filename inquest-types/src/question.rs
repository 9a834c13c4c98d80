use std::fmt;
use std::str::FromStr;

use crate::{Answer, Answers, Error, Theme, Validation};

/// A user-supplied predicate deciding whether an answer is acceptable.
pub type Validator = Box<dyn Fn(&Answer) -> Validation>;

/// A pure function applied to the committed answer before storage.
pub type Transform = Box<dyn Fn(Answer) -> Answer>;

/// A predicate over the answers collected so far, deciding whether a
/// question is asked at all.
pub type Condition = Box<dyn Fn(&Answers) -> bool>;

/// The widget family a question is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Free-text entry.
    Input,
    /// Yes/no confirmation, committed by a single keystroke.
    Confirm,
    /// Pick exactly one choice from a list.
    List,
    /// Pick any number of choices from a list.
    Checkbox,
}

impl Kind {
    /// All recognized kinds, for diagnostics.
    pub const ALL: [Kind; 4] = [Kind::Input, Kind::Confirm, Kind::List, Kind::Checkbox];

    /// Whether this kind presents a list of choices.
    pub fn has_choices(&self) -> bool {
        matches!(self, Self::List | Self::Checkbox)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Input => "Input",
            Self::Confirm => "Confirm",
            Self::List => "List",
            Self::Checkbox => "Checkbox",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Input" => Ok(Self::Input),
            "Confirm" => Ok(Self::Confirm),
            "List" => Ok(Self::List),
            "Checkbox" => Ok(Self::Checkbox),
            other => Err(Error::InvalidKind(other.to_string())),
        }
    }
}

/// The declarative description of one question.
///
/// A question is built once, handed to the orchestrator, and read-only
/// from then on. Construction uses the builder style:
///
/// ```
/// use inquest_types::{Kind, Question};
///
/// let question = Question::list("color", "Pick a color")
///     .with_choices(["Red", "Green", "Blue"]);
/// assert_eq!(question.kind, Some(Kind::List));
/// ```
pub struct Question {
    /// Unique identifier within a batch, case-insensitively.
    pub name: String,

    /// The prompt text shown to the user.
    pub message: String,

    /// The widget family. `None` is rejected at pre-flight.
    pub kind: Option<Kind>,

    /// Display strings for list-like kinds; ignored otherwise.
    pub choices: Vec<String>,

    /// Backend values parallel to `choices`. When absent, the choices
    /// themselves are stored as string answers.
    pub values: Option<Vec<Answer>>,

    /// Optional predicate run against the answer before commit.
    pub validate: Option<Validator>,

    /// Optional pure function applied to the answer before storage.
    pub transform: Option<Transform>,

    /// Substituted for an empty committed answer. `None` means "no
    /// default declared": an empty answer is then stored as-is. An
    /// explicit empty default is a real default and substitutes.
    pub default: Option<Answer>,

    /// Optional predicate over earlier answers; `false` skips the question.
    pub when: Option<Condition>,

    /// Visual theme override; the orchestrator falls back to `Theme::default()`.
    pub style: Option<Theme>,
}

impl Question {
    /// Create a question with no kind yet; pre-flight rejects it unless a
    /// kind is set with [`with_kind`](Self::with_kind).
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            kind: None,
            choices: Vec::new(),
            values: None,
            validate: None,
            transform: None,
            default: None,
            when: None,
            style: None,
        }
    }

    /// Create a free-text question.
    pub fn input(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message).with_kind(Kind::Input)
    }

    /// Create a yes/no question.
    pub fn confirm(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message).with_kind(Kind::Confirm)
    }

    /// Create a single-select question.
    pub fn list(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message).with_kind(Kind::List)
    }

    /// Create a multi-select question.
    pub fn checkbox(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, message).with_kind(Kind::Checkbox)
    }

    /// Set the widget kind.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the display choices for a list-like question.
    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    /// Set backend values parallel to the choices.
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Answer>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the validator.
    pub fn with_validate<F, V>(mut self, validate: F) -> Self
    where
        F: Fn(&Answer) -> V + 'static,
        V: Into<Validation>,
    {
        self.validate = Some(Box::new(move |answer| validate(answer).into()));
        self
    }

    /// Set the transform.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Answer) -> Answer + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Declare a default, substituted when the committed answer is empty.
    pub fn with_default(mut self, default: impl Into<Answer>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the condition deciding whether the question is asked.
    pub fn with_when<F>(mut self, when: F) -> Self
    where
        F: Fn(&Answers) -> bool + 'static,
    {
        self.when = Some(Box::new(when));
        self
    }

    /// Override the visual theme for this question.
    pub fn with_style(mut self, style: Theme) -> Self {
        self.style = Some(style);
        self
    }

    /// The values a selection resolves to: `values` when given, the
    /// choices themselves otherwise.
    pub fn resolved_values(&self) -> Vec<Answer> {
        match &self.values {
            Some(values) => values.clone(),
            None => self.choices.iter().map(|c| Answer::from(c.as_str())).collect(),
        }
    }
}

impl fmt::Debug for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Question")
            .field("name", &self.name)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("choices", &self.choices)
            .field("values", &self.values)
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("default", &self.default)
            .field("when", &self.when.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_from_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "Slider".parse::<Kind>().unwrap_err();
        assert!(matches!(err, Error::InvalidKind(name) if name == "Slider"));
    }

    #[test]
    fn values_fall_back_to_choices() {
        let question = Question::list("q", "pick").with_choices(["A", "B"]);
        assert_eq!(
            question.resolved_values(),
            vec![Answer::from("A"), Answer::from("B")]
        );
    }
}
