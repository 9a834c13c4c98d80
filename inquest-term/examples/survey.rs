//! One question of each kind, exercising defaults, transforms,
//! validators, backend values, and a conditional follow-up.
//!
//! Run with `RUST_LOG=inquest=debug` to see the orchestrator's trace.

use anyhow::Result;
use inquest::{Answer, Answers, Question, Validation, prompt};
use inquest_term::TermConsole;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let questions = [
        Question::input("name", "What is your name?").with_default("stranger"),
        Question::input("port", "Which port should the server use?")
            .with_default("8080")
            .with_validate(|a: &Answer| {
                let ok = a
                    .as_str()
                    .is_some_and(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()));
                if ok {
                    Validation::Valid
                } else {
                    Validation::InvalidWith("The port must be a number.".to_string())
                }
            })
            .with_transform(|a| match a {
                Answer::String(s) => s.parse::<i64>().map(Answer::Int).unwrap_or(Answer::String(s)),
                other => other,
            }),
        Question::list("editor", "Which editor do you use?")
            .with_choices(["Vim", "Emacs", "Helix", "Other"]),
        Question::checkbox("languages", "Which languages do you write?")
            .with_choices(["Rust", "Python", "Go", "C"])
            .with_validate(|a: &Answer| {
                if a.is_empty() {
                    Validation::InvalidWith("Pick at least one language.".to_string())
                } else {
                    Validation::Valid
                }
            }),
        Question::confirm("newsletter", "Subscribe to the newsletter?"),
        Question::input("email", "What is your email address?")
            .with_when(|answers: &Answers| answers.get_bool("newsletter") == Some(true)),
    ];

    let mut console = TermConsole::new();
    let answers = prompt(questions, &mut console)?;

    println!();
    for (name, answer) in answers.iter() {
        println!("{name}: {answer:?}");
    }
    Ok(())
}
