mod form;
pub mod layout;
mod loader;
mod quiz;
mod summary;

pub use form::draw_form;
pub use layout::{calculate_form_chunks, calculate_quiz_chunks, calculate_result_chunks};
pub use loader::{draw_failure, draw_loader, draw_result_loader};
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

/// Draw whatever screen `app.state` calls for.
pub fn draw_app(f: &mut Frame, app: &App, tick: usize) {
    match &app.state {
        AppState::Configure => draw_form(f, &app.form),
        AppState::Loading => {
            draw_form(f, &app.form);
            draw_loader(f, tick);
        }
        AppState::Quiz => {
            if let Some(session) = &app.session {
                draw_quiz(f, session);
            }
        }
        AppState::QuizQuitConfirm => draw_quit_confirmation(f),
        AppState::Result if app.results.loading => draw_result_loader(f, tick),
        AppState::Result => draw_summary(f, app.results.result.as_ref()),
        AppState::Failed(message) => {
            draw_form(f, &app.form);
            draw_failure(f, message);
        }
    }
}
