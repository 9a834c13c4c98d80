//! Batch-level behavior: pre-flight validation, ordering, conditional
//! questions.

use inquest::{Answers, Error, Key, Kind, Question, TestConsole, prompt, prompt_one};

#[test]
fn duplicate_names_abort_before_any_form_runs() {
    let questions = [
        Question::input("City", "Where do you live?"),
        Question::input("city", "Which city?"),
    ];

    let mut console = TestConsole::new().with_line("should never be typed");
    let err = prompt(questions, &mut console).unwrap_err();

    assert!(matches!(err, Error::DuplicateNames(_)));
    // Zero forms ran: nothing was drawn, the screen was never acquired.
    assert!(console.frames().is_empty());
    assert_eq!(console.enters(), 0);
}

#[test]
fn unnamed_question_aborts_the_batch() {
    let questions = [
        Question::input("name", "Name?"),
        Question::input("", "Anonymous?"),
    ];

    let mut console = TestConsole::new().with_line("never");
    let err = prompt(questions, &mut console).unwrap_err();

    assert!(matches!(err, Error::UnnamedQuestion));
    assert!(console.frames().is_empty());
}

#[test]
fn missing_kind_aborts_the_batch() {
    let questions = [Question::new("q", "Which kind am I?")];

    let mut console = TestConsole::new();
    let err = prompt(questions, &mut console).unwrap_err();

    assert!(matches!(err, Error::MissingKind(name) if name == "q"));
}

#[test]
fn unrecognized_kind_name_is_rejected_at_parse_time() {
    let err = "Slider".parse::<Kind>().unwrap_err();
    assert!(matches!(err, Error::InvalidKind(name) if name == "Slider"));
}

#[test]
fn kind_parsed_from_a_string_drives_the_widget() {
    let kind: Kind = "Confirm".parse().unwrap();
    let question = Question::new("sure", "Sure?").with_kind(kind);

    let mut console = TestConsole::new().with_keys([Key::Char('y')]);
    let answers = prompt_one(question, &mut console).unwrap();
    assert_eq!(answers.get_bool("sure"), Some(true));
}

#[test]
fn answers_keep_question_order() {
    let questions = [
        Question::input("first", "First?"),
        Question::confirm("second", "Second?"),
        Question::list("third", "Third?").with_choices(["a", "b"]),
    ];

    let mut console = TestConsole::new()
        .with_line("one")
        .with_keys([Key::Char('y'), Key::Enter]);
    let answers = prompt(questions, &mut console).unwrap();

    let names: Vec<&str> = answers.iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn when_branches_on_an_earlier_answer() {
    fn questions() -> [Question; 2] {
        [
            Question::confirm("has_pet", "Do you have a pet?"),
            Question::input("pet_name", "What's its name?")
                .with_when(|answers: &Answers| answers.get_bool("has_pet") == Some(true)),
        ]
    }

    // Answering yes asks the follow-up.
    let mut console = TestConsole::new()
        .with_keys([Key::Char('y')])
        .with_line("Rex");
    let answers = prompt(questions(), &mut console).unwrap();
    assert_eq!(answers.get_str("pet_name"), Some("Rex"));

    // Answering no skips it; the name is absent from the result.
    let mut console = TestConsole::new().with_keys([Key::Char('n')]);
    let answers = prompt(questions(), &mut console).unwrap();
    assert_eq!(answers.get_bool("has_pet"), Some(false));
    assert!(!answers.contains("pet_name"));
    assert_eq!(answers.len(), 1);
}

#[test]
fn skipped_question_does_not_touch_the_screen() {
    let questions = [
        Question::confirm("ask_more", "More questions?"),
        Question::input("more", "Go on then")
            .with_when(|answers: &Answers| answers.get_bool("ask_more") == Some(true)),
    ];

    let mut console = TestConsole::new().with_keys([Key::Char('n')]);
    prompt(questions, &mut console).unwrap();

    // Only the confirm form acquired the screen.
    assert_eq!(console.enters(), 1);
    assert!(console.screen_balanced());
}

#[test]
fn empty_batch_yields_empty_answers() {
    let mut console = TestConsole::new();
    let answers = prompt([], &mut console).unwrap();
    assert!(answers.is_empty());
}
