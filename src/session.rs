use crate::answers::AnswerSet;
use crate::error::{SessionError, TransitionError};
use crate::logger;
use crate::models::{AppState, PresentedQuestion, RawQuestion};
use crate::result::{QuizResult, ResultEmitter};
use crossterm::event::{KeyCode, KeyEvent};
use std::io;

/// Where the session stands. Question indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer {
        index: usize,
        selected: Option<String>,
    },
    /// `selected` is `None` when the question was submitted blank.
    Answered {
        index: usize,
        selected: Option<String>,
        correct: bool,
    },
    Concluded(QuizResult),
}

/// A single pass over a fetched question list.
///
/// Legal moves are `submit_answer` while awaiting an answer and `advance`
/// once answered; anything else is refused with a `TransitionError` and
/// leaves score and phase as they were.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<RawQuestion>,
    answers: AnswerSet,
    score: usize,
    phase: Phase,
}

impl QuizSession {
    pub fn new(questions: Vec<RawQuestion>) -> Result<Self, SessionError> {
        let first = questions.first().ok_or(SessionError::NoQuestions)?;
        let answers = AnswerSet::new(first);
        logger::log(&format!("Session started with {} questions", questions.len()));

        Ok(Self {
            questions,
            answers,
            score: 0,
            phase: Phase::AwaitingAnswer {
                index: 1,
                selected: None,
            },
        })
    }

    pub fn questions_count(&self) -> usize {
        self.questions.len()
    }

    /// 1-based position; stays on the last question once concluded.
    pub fn current_index(&self) -> usize {
        match &self.phase {
            Phase::AwaitingAnswer { index, .. } | Phase::Answered { index, .. } => *index,
            Phase::Concluded(_) => self.questions.len(),
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn presented(&self) -> &PresentedQuestion {
        self.answers.presented()
    }

    pub fn selected(&self) -> Option<&str> {
        match &self.phase {
            Phase::AwaitingAnswer { selected, .. } => selected.as_deref(),
            Phase::Answered { selected, .. } => selected.as_deref(),
            Phase::Concluded(_) => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.phase, Phase::Answered { .. })
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.phase, Phase::Concluded(_))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == self.questions.len()
    }

    pub fn result(&self) -> Option<QuizResult> {
        match self.phase {
            Phase::Concluded(result) => Some(result),
            _ => None,
        }
    }

    /// Highlight a choice. Ignored unless the current question is still open.
    pub fn select(&mut self, choice: &str) -> bool {
        match &mut self.phase {
            Phase::AwaitingAnswer { selected, .. } => {
                *selected = Some(choice.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn select_next(&mut self) -> bool {
        self.select_offset(1)
    }

    pub fn select_previous(&mut self) -> bool {
        self.select_offset(-1)
    }

    fn select_offset(&mut self, offset: isize) -> bool {
        let choices = self.answers.choices();
        if choices.is_empty() {
            return false;
        }
        let len = choices.len() as isize;
        let current = self
            .selected()
            .and_then(|s| choices.iter().position(|c| c == s));
        let next = match current {
            Some(pos) => (pos as isize + offset).rem_euclid(len),
            None if offset >= 0 => 0,
            None => len - 1,
        };
        let choice = choices[next as usize].clone();
        self.select(&choice)
    }

    /// Lock in an answer for the current question. Returns whether it was
    /// correct.
    pub fn submit_answer(&mut self, selected: &str) -> Result<bool, TransitionError> {
        self.lock_answer(Some(selected))
    }

    /// Submit whatever is highlighted. With nothing highlighted the question
    /// is still locked, scored as wrong.
    pub fn submit_selected(&mut self) -> Result<bool, TransitionError> {
        let selected = self.selected().map(str::to_string);
        self.lock_answer(selected.as_deref())
    }

    fn lock_answer(&mut self, selected: Option<&str>) -> Result<bool, TransitionError> {
        let index = match &self.phase {
            Phase::AwaitingAnswer { index, .. } => *index,
            Phase::Answered { index, .. } => return Err(TransitionError::AlreadyAnswered(*index)),
            Phase::Concluded(_) => return Err(TransitionError::Concluded),
        };

        let correct = selected.is_some_and(|choice| self.answers.is_correct(choice));
        if correct {
            self.score += 1;
        }
        logger::log(&format!(
            "Question {} answered ({}), score {}",
            index,
            match (selected, correct) {
                (None, _) => "blank",
                (Some(_), true) => "correct",
                (Some(_), false) => "incorrect",
            },
            self.score
        ));

        self.phase = Phase::Answered {
            index,
            selected: selected.map(str::to_string),
            correct,
        };
        Ok(correct)
    }

    /// Move past an answered question, concluding after the last one.
    pub fn advance(&mut self, emitter: &mut dyn ResultEmitter) -> Result<(), TransitionError> {
        let index = match &self.phase {
            Phase::Answered { index, .. } => *index,
            Phase::AwaitingAnswer { index, .. } => return Err(TransitionError::NotAnswered(*index)),
            Phase::Concluded(_) => return Err(TransitionError::Concluded),
        };

        if index >= self.questions.len() {
            let result = QuizResult {
                score: self.score,
                total: self.questions.len(),
            };
            self.phase = Phase::Concluded(result);
            emitter.show_loader();
            emitter.emit(result);
            return Ok(());
        }

        self.answers = AnswerSet::new(&self.questions[index]);
        self.phase = Phase::AwaitingAnswer {
            index: index + 1,
            selected: None,
        };
        Ok(())
    }
}

pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    emitter: &mut dyn ResultEmitter,
) -> io::Result<()> {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            session.select_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            session.select_previous();
        }
        KeyCode::Enter => {
            if session.is_answered() {
                if session.advance(emitter).is_ok() && session.is_concluded() {
                    *app_state = AppState::Result;
                }
            } else if let Err(e) = session.submit_selected() {
                logger::log(&format!("Ignored submit: {}", e));
            }
        }
        _ => {}
    }
    Ok(())
}
