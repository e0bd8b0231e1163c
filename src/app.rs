use crate::config::NavigationParams;
use crate::entry::{check_entry, EntryOutcome};
use crate::fetch_worker::{spawn_fetch_worker, PendingFetch};
use crate::form::{handle_form_input, ConfigForm, FormAction};
use crate::gateway::QuestionBank;
use crate::logger;
use crate::models::{AppState, Choice};
use crate::result::ResultSlot;
use crate::session::{handle_quiz_input, QuizSession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;
use std::sync::Arc;

pub struct App {
    pub state: AppState,
    pub form: ConfigForm,
    pub session: Option<QuizSession>,
    pub results: ResultSlot,
    pub last_params: Option<NavigationParams>,
    pub should_quit: bool,
    pending: Option<PendingFetch>,
    bank: Arc<dyn QuestionBank>,
}

impl App {
    pub fn new(bank: Arc<dyn QuestionBank>, categories: Vec<Choice>) -> Self {
        Self {
            state: AppState::Configure,
            form: ConfigForm::new(categories),
            session: None,
            results: ResultSlot::default(),
            last_params: None,
            should_quit: false,
            pending: None,
            bank,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Hand the form's configuration to the quiz screen.
    pub fn start_quiz(&mut self) {
        let params = self.form.config.to_navigation_params();
        self.enter_quiz(params);
    }

    /// Quiz-screen entry: guard, then at most one fetch in flight.
    pub fn enter_quiz(&mut self, params: NavigationParams) {
        if self.pending.is_some() {
            logger::log("Fetch already in flight, ignoring quiz entry");
            return;
        }

        match check_entry(&params.to_pairs()) {
            EntryOutcome::Redirect => {
                self.state = AppState::Configure;
            }
            EntryOutcome::Fetch(ticket) => match spawn_fetch_worker(self.bank.clone(), ticket) {
                Ok(pending) => {
                    self.session = None;
                    self.results = ResultSlot::default();
                    self.pending = Some(pending);
                    self.last_params = Some(params);
                    self.state = AppState::Loading;
                }
                Err(e) => {
                    logger::log(&format!("Could not start fetch: {}", e));
                    self.state = AppState::Failed(e.to_string());
                }
            },
        }
    }

    /// Pick up a finished fetch, if any.
    pub fn tick(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let Some(outcome) = pending.poll() else {
            return;
        };
        self.pending = None;

        match outcome {
            Ok(session) => {
                self.session = Some(session);
                self.state = AppState::Quiz;
            }
            Err(e) => {
                self.state = AppState::Failed(e.to_string());
            }
        }
    }

    /// Called after each drawn frame.
    pub fn frame_drawn(&mut self) {
        if self.state == AppState::Result && self.results.loading {
            self.results.finish_handoff();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> io::Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.state {
            AppState::Configure => match handle_form_input(&mut self.form, key) {
                FormAction::Submit => self.start_quiz(),
                FormAction::Quit => self.should_quit = true,
                FormAction::None => {}
            },
            AppState::Loading => {
                if key.code == KeyCode::Esc {
                    // worker finishes on its own; its result is dropped
                    self.pending = None;
                    self.state = AppState::Configure;
                }
            }
            AppState::Quiz => {
                if let Some(session) = &mut self.session {
                    handle_quiz_input(session, key, &mut self.state, &mut self.results)?;
                }
            }
            AppState::QuizQuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.session = None;
                    self.state = AppState::Configure;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state = AppState::Quiz;
                }
                _ => {}
            },
            AppState::Result => match key.code {
                KeyCode::Char('r') => {
                    if let Some(params) = self.last_params.clone() {
                        self.enter_quiz(params);
                    }
                }
                KeyCode::Char('m') => {
                    self.session = None;
                    self.state = AppState::Configure;
                }
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            AppState::Failed(_) => match key.code {
                KeyCode::Char('r') => {
                    if let Some(params) = self.last_params.clone() {
                        self.enter_quiz(params);
                    }
                }
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m') => {
                    self.state = AppState::Configure;
                }
                _ => {}
            },
        }
        Ok(())
    }
}
