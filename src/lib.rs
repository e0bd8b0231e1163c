pub mod answers;
pub mod app;
pub mod config;
pub mod entry;
pub mod error;
pub mod fetch_worker;
pub mod form;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod result;
pub mod session;
pub mod settings;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use answers::AnswerSet;
pub use app::App;
pub use config::{FilterField, NavigationParams, QuizConfiguration};
pub use entry::{check_entry, load_session, EntryOutcome, FetchTicket};
pub use error::{EntryError, GatewayError, SessionError, TransitionError};
pub use gateway::{OpenTdbClient, QuestionBank, QuestionRequest};
pub use models::{AppState, Choice, PresentedQuestion, RawQuestion};
pub use result::{QuizResult, ResultEmitter, ResultSlot};
pub use session::{handle_quiz_input, Phase, QuizSession};
pub use settings::Settings;
pub use ui::draw_app;
