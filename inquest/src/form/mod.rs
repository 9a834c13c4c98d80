//! The four form kinds and their shared run lifecycle.
//!
//! A [`Form`] is built from one [`Question`] right before it runs and is
//! discarded once it has produced (or skipped) its answer. The widget
//! kinds are a closed tagged union dispatched by pattern matching; all
//! of them share one [`Pipeline`] for default/validate/transform
//! semantics.

use std::collections::HashMap;

use inquest_types::{Answers, Condition, Error, Kind, Question};

use crate::console::{Console, Key};
use crate::pipeline::Pipeline;

mod input;
pub(crate) use input::InputForm;

mod confirm;
pub(crate) use confirm::ConfirmForm;

mod list;
pub(crate) use list::ListForm;

mod checkbox;
pub(crate) use checkbox::CheckboxForm;

/// A widget-level action a key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    MoveUp,
    MoveDown,
    Toggle,
    SelectAll,
    InvertAll,
    Commit,
    Yes,
    No,
}

/// Immutable key-to-action dispatch table, built once per form.
#[derive(Debug, Default)]
pub(crate) struct KeyMap {
    bindings: HashMap<Key, Action>,
}

impl KeyMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(mut self, key: Key, action: Action) -> Self {
        self.bindings.insert(key, action);
        self
    }

    pub(crate) fn action(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

/// One running instance of a question's interactive widget.
pub struct Form {
    name: String,
    when: Option<Condition>,
    pipeline: Pipeline,
    widget: Widget,
}

enum Widget {
    Input(InputForm),
    Confirm(ConfirmForm),
    List(ListForm),
    Checkbox(CheckboxForm),
}

pub(crate) fn console_err<E: Into<anyhow::Error>>(err: E) -> Error {
    Error::Console(err.into())
}

impl Form {
    /// Build the matching widget for a question.
    ///
    /// The same checks the orchestrator performs at pre-flight apply
    /// here, so a form built directly from a malformed question still
    /// fails before touching the screen.
    pub fn new(question: Question) -> Result<Self, Error> {
        if question.name.trim().is_empty() {
            return Err(Error::UnnamedQuestion);
        }
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

        let values = question.resolved_values();
        let theme = question.style.unwrap_or_default();
        let widget = match kind {
            Kind::Input => Widget::Input(InputForm::new(question.message, theme)),
            Kind::Confirm => Widget::Confirm(ConfirmForm::new(question.message, theme)),
            Kind::List => Widget::List(ListForm::new(question.message, question.choices, values, theme)),
            Kind::Checkbox => {
                Widget::Checkbox(CheckboxForm::new(question.message, question.choices, values, theme))
            }
        };

        Ok(Self {
            name: question.name,
            when: question.when,
            pipeline: Pipeline::new(question.default, question.transform, question.validate),
            widget,
        })
    }

    /// The question name this form answers under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ask the question, unless its condition says otherwise.
    ///
    /// When the `when` predicate rejects the answers collected so far
    /// the form does nothing and its name stays absent from the map.
    /// Otherwise the widget loop runs to completion and exactly one
    /// entry is written. The console is released on every exit path.
    pub fn run<C: Console>(&mut self, console: &mut C, answers: &mut Answers) -> Result<(), Error> {
        if let Some(when) = &self.when
            && !when(answers)
        {
            tracing::debug!(name = %self.name, "question skipped by condition");
            return Ok(());
        }
        tracing::debug!(name = %self.name, "asking question");

        console.enter().map_err(console_err)?;
        let outcome = match &mut self.widget {
            Widget::Input(form) => form.collect(console, &self.pipeline),
            Widget::Confirm(form) => form.collect(console),
            Widget::List(form) => form.collect(console),
            Widget::Checkbox(form) => form.collect(console, &self.pipeline),
        };
        let released = console.leave();

        let raw = outcome?;
        released.map_err(console_err)?;

        answers.insert(self.name.clone(), self.pipeline.finish(raw));
        Ok(())
    }
}
