use std::fmt;

pub const PARAM_RESULT: &str = "result";

/// Final score of a concluded session. Displays as `"{score}/{total}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f32 / self.total as f32 * 100.0
    }

    /// The single parameter handed to the result screen.
    pub fn to_navigation_param(&self) -> (String, String) {
        (PARAM_RESULT.to_string(), self.to_string())
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// Receiver of the final score when a session concludes.
pub trait ResultEmitter {
    /// Fire-and-forget signal that the result handoff has started.
    fn show_loader(&mut self) {}

    fn emit(&mut self, result: QuizResult);
}

/// Keeps the last emitted result for the result screen.
///
/// `loading` goes up when the handoff starts and stays up until the result
/// screen has been drawn once.
#[derive(Debug, Default, Clone)]
pub struct ResultSlot {
    pub loading: bool,
    pub result: Option<QuizResult>,
}

impl ResultSlot {
    pub fn finish_handoff(&mut self) {
        self.loading = false;
    }
}

impl ResultEmitter for ResultSlot {
    fn show_loader(&mut self) {
        self.loading = true;
    }

    fn emit(&mut self, result: QuizResult) {
        let (key, value) = result.to_navigation_param();
        crate::logger::log(&format!("Quiz concluded, handing off {}={}", key, value));
        self.result = Some(result);
    }
}
