use crate::app::App;
use crate::form::ConfigForm;
use crate::gateway::MockQuestionBank;
use crate::models::{AppState, Choice, RawQuestion};
use crate::result::{QuizResult, ResultEmitter, ResultSlot};
use crate::session::QuizSession;
use crate::ui::{draw_app, draw_form, draw_quiz, draw_summary};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for row in buffer.content.chunks(width) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).unwrap()
}

fn sample_session() -> QuizSession {
    QuizSession::new(vec![
        RawQuestion::new(
            "Who wrote &quot;Hamlet&quot;?",
            "Shakespeare",
            vec!["Marlowe".to_string(), "Jonson".to_string()],
        ),
        RawQuestion::new("2 + 2 = 4", "True", vec!["False".to_string()]),
    ])
    .unwrap()
}

#[test]
fn test_form_shows_defaults() {
    let mut terminal = terminal();
    let form = ConfigForm::new(vec![Choice::new("9", "General Knowledge")]);

    terminal.draw(|f| draw_form(f, &form)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("quizWiz"));
    assert!(text.contains("Number Of Questions"));
    assert!(text.contains("< 5 >"));
    assert!(text.contains("Any Category"));
    assert!(text.contains("Any Type"));
    assert!(text.contains("Any Difficulty"));
    assert!(text.contains("Start Quiz"));
}

#[test]
fn test_quiz_shows_decoded_question_and_choices() {
    let mut terminal = terminal();
    let session = sample_session();

    terminal.draw(|f| draw_quiz(f, &session)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Question 1/2"));
    assert!(text.contains("Who wrote \"Hamlet\"?"));
    for choice in ["Shakespeare", "Marlowe", "Jonson"] {
        assert!(text.contains(choice), "missing {choice}");
    }
    assert!(text.contains("Submit"));
}

#[test]
fn test_answer_order_stable_across_redraws() {
    let mut terminal = terminal();
    let session = sample_session();

    terminal.draw(|f| draw_quiz(f, &session)).unwrap();
    let first = buffer_text(terminal.backend().buffer());
    terminal.draw(|f| draw_quiz(f, &session)).unwrap();
    let second = buffer_text(terminal.backend().buffer());

    assert_eq!(first, second);
}

#[test]
fn test_quiz_after_submit_offers_next() {
    let mut terminal = terminal();
    let mut session = sample_session();
    session.submit_answer("Shakespeare").unwrap();

    terminal.draw(|f| draw_quiz(f, &session)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Correct!"));
    assert!(text.contains("Next"));
    assert!(text.contains("Score: 1"));
}

#[test]
fn test_last_question_offers_finish() {
    let mut terminal = terminal();
    let mut session = sample_session();
    let mut slot = ResultSlot::default();
    session.submit_answer("Marlowe").unwrap();
    session.advance(&mut slot).unwrap();
    session.submit_answer("False").unwrap();

    terminal.draw(|f| draw_quiz(f, &session)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Question 2/2"));
    assert!(text.contains("Incorrect"));
    assert!(text.contains("Finish"));
}

#[test]
fn test_summary_shows_score_string() {
    let mut terminal = terminal();
    let result = QuizResult { score: 3, total: 5 };

    terminal.draw(|f| draw_summary(f, Some(&result))).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Your score: 3/5"));
    assert!(text.contains("60%"));
}

#[test]
fn test_loading_and_failure_screens() {
    let mut terminal = terminal();
    let mut app = App::new(Arc::new(MockQuestionBank::failing()), Vec::new());

    app.state = AppState::Loading;
    terminal.draw(|f| draw_app(f, &app, 0)).unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Loading questions"));

    app.state = AppState::Failed("question bank returned no questions".to_string());
    terminal.draw(|f| draw_app(f, &app, 0)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Could not load questions"));
    assert!(text.contains("question bank returned no questions"));
}

#[test]
fn test_result_handoff_shows_loader_for_one_frame() {
    let mut terminal = terminal();
    let mut app = App::new(Arc::new(MockQuestionBank::failing()), Vec::new());
    app.results.show_loader();
    app.results.emit(QuizResult { score: 2, total: 3 });
    app.state = AppState::Result;

    terminal.draw(|f| draw_app(f, &app, 0)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Loading results"));
    assert!(!text.contains("Your score"));

    app.frame_drawn();
    terminal.draw(|f| draw_app(f, &app, 1)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Your score: 2/3"));
    assert!(!text.contains("Loading results"));
}
