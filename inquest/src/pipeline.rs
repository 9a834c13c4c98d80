use inquest_types::{Answer, Transform, Validation, Validator};

/// The per-question answer pipeline: default substitution, validation,
/// transformation.
///
/// Every form kind funnels its committed raw value through one of these,
/// so the default/transform semantics are uniform across widgets.
/// Validation runs inside the widget loop (it gates the commit), the
/// other two steps run once after the commit succeeds.
pub struct Pipeline {
    default: Option<Answer>,
    transform: Option<Transform>,
    validate: Option<Validator>,
}

impl Pipeline {
    pub fn new(
        default: Option<Answer>,
        transform: Option<Transform>,
        validate: Option<Validator>,
    ) -> Self {
        Self {
            default,
            transform,
            validate,
        }
    }

    /// Run the declared validator against a candidate answer.
    ///
    /// Returns `Valid` when no validator is declared.
    pub fn check(&self, candidate: &Answer) -> Validation {
        match &self.validate {
            Some(validate) => validate(candidate),
            None => Validation::Valid,
        }
    }

    /// Turn a committed raw value into the stored answer.
    ///
    /// An empty raw value is replaced by the default, when one was
    /// declared; the transform then runs exactly once, on the possibly
    /// defaulted value. The order is fixed: default first, transform
    /// second.
    pub fn finish(&self, raw: Answer) -> Answer {
        let value = if raw.is_empty() {
            match &self.default {
                Some(default) => default.clone(),
                None => raw,
            }
        } else {
            raw
        };
        match &self.transform {
            Some(transform) => transform(value),
            None => value,
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("default", &self.default)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(
        default: Option<Answer>,
        transform: Option<Transform>,
        validate: Option<Validator>,
    ) -> Pipeline {
        Pipeline::new(default, transform, validate)
    }

    #[test]
    fn empty_raw_takes_the_default() {
        let p = pipeline(Some(Answer::Int(42)), None, None);
        assert_eq!(p.finish(Answer::from("")), Answer::Int(42));
    }

    #[test]
    fn empty_raw_without_default_stays_empty() {
        let p = pipeline(None, None, None);
        assert_eq!(p.finish(Answer::from("")), Answer::from(""));
    }

    #[test]
    fn explicit_empty_default_substitutes() {
        // A declared default always substitutes for an empty raw value,
        // even when the default itself is empty.
        let p = pipeline(Some(Answer::List(Vec::new())), None, None);
        assert_eq!(p.finish(Answer::from("")), Answer::List(Vec::new()));
    }

    #[test]
    fn false_is_a_real_answer() {
        let p = pipeline(Some(Answer::from("fallback")), None, None);
        assert_eq!(p.finish(Answer::Bool(false)), Answer::Bool(false));
    }

    #[test]
    fn transform_runs_after_defaulting() {
        let double = |a: Answer| match a {
            Answer::Int(i) => Answer::Int(i * 2),
            Answer::String(s) => Answer::String(format!("{s}{s}")),
            other => other,
        };

        let p = pipeline(Some(Answer::Int(21)), Some(Box::new(double)), None);
        // Default 21 substitutes for the empty raw, then the transform doubles it.
        assert_eq!(p.finish(Answer::from("")), Answer::Int(42));
        // A non-empty raw skips the default but is still transformed.
        assert_eq!(p.finish(Answer::from("21")), Answer::from("2121"));
    }

    #[test]
    fn check_without_validator_is_valid() {
        let p = pipeline(None, None, None);
        assert!(p.check(&Answer::from("anything")).is_valid());
    }

    #[test]
    fn check_runs_the_validator() {
        let p = pipeline(
            None,
            None,
            Some(Box::new(|a: &Answer| {
                Validation::from(a.as_str().is_some_and(|s| !s.is_empty()))
            })),
        );
        assert!(p.check(&Answer::from("ok")).is_valid());
        assert!(!p.check(&Answer::from("")).is_valid());
    }
}
