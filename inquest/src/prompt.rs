//! The orchestrator: batch validation and sequential form execution.

use std::collections::HashSet;

use inquest_types::{Answers, Error, Question};

use crate::console::Console;
use crate::form::Form;

/// Ask a batch of questions and collect the answers.
///
/// The whole batch is validated before any screen is drawn: every
/// question needs a non-empty name, names must be unique
/// case-insensitively, every question needs a recognized kind, and
/// list-like questions need choices (with `values` matching in length).
/// Any violation aborts with the matching [`Error`] variant and zero
/// forms run.
///
/// Forms then run strictly sequentially in the given order. Each one
/// sees the answers collected so far, so a later question's `when`
/// predicate can branch on earlier answers. A skipped question leaves
/// no entry in the result.
///
/// # Errors
///
/// Specification errors as described above, or [`Error::Console`] when
/// the display backend fails mid-run (collected answers are lost).
pub fn prompt<I, C>(questions: I, console: &mut C) -> Result<Answers, Error>
where
    I: IntoIterator<Item = Question>,
    C: Console,
{
    let questions: Vec<Question> = questions.into_iter().collect();
    preflight(&questions)?;
    tracing::debug!(count = questions.len(), "questionnaire validated");

    let mut forms = questions
        .into_iter()
        .map(Form::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut answers = Answers::new();
    for form in &mut forms {
        form.run(console, &mut answers)?;
    }
    tracing::debug!(answered = answers.len(), "questionnaire complete");
    Ok(answers)
}

/// Ask a single question; see [`prompt`].
pub fn prompt_one<C: Console>(question: Question, console: &mut C) -> Result<Answers, Error> {
    prompt([question], console)
}

fn preflight(questions: &[Question]) -> Result<(), Error> {
    for question in questions {
        if question.name.trim().is_empty() {
            return Err(Error::UnnamedQuestion);
        }
    }

    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(question.name.to_lowercase()) {
            return Err(Error::DuplicateNames(question.name.clone()));
        }
    }

    for question in questions {
        let kind = question
            .kind
            .ok_or_else(|| Error::MissingKind(question.name.clone()))?;
        if kind.has_choices() {
            if question.choices.is_empty() {
                return Err(Error::MissingChoices(question.name.clone()));
            }
            if let Some(values) = &question.values
                && values.len() != question.choices.len()
            {
                return Err(Error::MismatchedValues(question.name.clone()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquest_types::Kind;

    #[test]
    fn unnamed_question_is_rejected() {
        let questions = vec![Question::input("", "no name")];
        let err = preflight(&questions).unwrap_err();
        assert!(matches!(err, Error::UnnamedQuestion));
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let questions = vec![
            Question::input("color", "first"),
            Question::input("COLOR", "second"),
        ];
        let err = preflight(&questions).unwrap_err();
        assert!(matches!(err, Error::DuplicateNames(name) if name == "COLOR"));
    }

    #[test]
    fn missing_kind_is_rejected() {
        let questions = vec![Question::new("q", "no kind")];
        let err = preflight(&questions).unwrap_err();
        assert!(matches!(err, Error::MissingKind(name) if name == "q"));
    }

    #[test]
    fn list_without_choices_is_rejected() {
        let questions = vec![Question::new("q", "empty").with_kind(Kind::List)];
        let err = preflight(&questions).unwrap_err();
        assert!(matches!(err, Error::MissingChoices(name) if name == "q"));
    }

    #[test]
    fn mismatched_values_are_rejected() {
        let questions = vec![
            Question::checkbox("q", "pick")
                .with_choices(["A", "B"])
                .with_values([1i64]),
        ];
        let err = preflight(&questions).unwrap_err();
        assert!(matches!(err, Error::MismatchedValues(name) if name == "q"));
    }

    #[test]
    fn valid_batch_passes() {
        let questions = vec![
            Question::input("name", "Your name?"),
            Question::confirm("sure", "Sure?"),
            Question::list("color", "Pick").with_choices(["Red", "Blue"]),
            Question::checkbox("tools", "Select")
                .with_choices(["Hammer", "Saw"])
                .with_values([1i64, 2i64]),
        ];
        assert!(preflight(&questions).is_ok());
    }
}
