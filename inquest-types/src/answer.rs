/// A single answer value produced by a form.
///
/// This is the value stored in [`Answers`](crate::Answers) for each
/// committed question, and also the type of the backend `values` a
/// list-like question resolves its selection to.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Free text (from Input questions, or choice labels used as values).
    String(String),

    /// A yes/no answer (from Confirm questions).
    Bool(bool),

    /// An integer value (typically supplied through `values` or a default).
    Int(i64),

    /// A floating-point value (typically supplied through `values`).
    Float(f64),

    /// An ordered list of values (from Checkbox questions).
    List(Vec<Answer>),
}

impl Answer {
    /// Whether this value counts as "empty" for default substitution.
    ///
    /// Only an empty string or an empty list is empty; `Bool(false)`,
    /// `Int(0)` and friends are real answers and are never replaced by
    /// a default.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a list slice.
    pub fn as_list(&self) -> Option<&[Answer]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "String",
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::List(_) => "List",
        }
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Answer {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Answer {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Answer {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<Answer>> for Answer {
    fn from(items: Vec<Answer>) -> Self {
        Self::List(items)
    }
}
