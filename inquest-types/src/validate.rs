/// The verdict of a user-supplied validator.
///
/// Validators may signal plain success, plain failure (a generic message
/// is shown), or failure with a specific message to display instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The input is acceptable.
    Valid,

    /// The input is rejected; the generic message is shown.
    Invalid,

    /// The input is rejected; the given message is shown.
    InvalidWith(String),
}

impl Validation {
    /// The message shown for [`Validation::Invalid`].
    pub const GENERIC_MESSAGE: &'static str = "Could not validate the input successfully.";

    /// Check whether this verdict accepts the input.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The message to display, or `None` when valid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid => Some(Self::GENERIC_MESSAGE),
            Self::InvalidWith(message) => Some(message),
        }
    }
}

impl From<bool> for Validation {
    fn from(ok: bool) -> Self {
        if ok { Self::Valid } else { Self::Invalid }
    }
}

impl From<String> for Validation {
    fn from(message: String) -> Self {
        Self::InvalidWith(message)
    }
}

impl From<&str> for Validation {
    fn from(message: &str) -> Self {
        Self::InvalidWith(message.to_string())
    }
}

impl<E: std::fmt::Display> From<Result<(), E>> for Validation {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(e) => Self::InvalidWith(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion() {
        assert_eq!(Validation::from(true), Validation::Valid);
        assert_eq!(Validation::from(false), Validation::Invalid);
    }

    #[test]
    fn messages() {
        assert_eq!(Validation::Valid.message(), None);
        assert_eq!(
            Validation::Invalid.message(),
            Some(Validation::GENERIC_MESSAGE)
        );
        assert_eq!(
            Validation::InvalidWith("too short".into()).message(),
            Some("too short")
        );
    }
}
