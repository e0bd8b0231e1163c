use crate::entry::{load_session, FetchTicket};
use crate::error::{EntryError, GatewayError};
use crate::gateway::QuestionBank;
use crate::logger;
use crate::session::QuizSession;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

pub type FetchOutcome = Result<QuizSession, EntryError>;

/// A fetch running on its worker thread.
#[derive(Debug)]
pub struct PendingFetch {
    rx: Receiver<FetchOutcome>,
}

impl PendingFetch {
    /// `None` while the worker is still waiting on the question bank.
    pub fn poll(&self) -> Option<FetchOutcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(GatewayError::WorkerGone.into())),
        }
    }

    /// Block until the worker delivers.
    #[cfg(test)]
    pub fn wait(self) -> FetchOutcome {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(GatewayError::WorkerGone.into()))
    }
}

pub fn spawn_fetch_worker(
    bank: Arc<dyn QuestionBank>,
    ticket: FetchTicket,
) -> Result<PendingFetch, EntryError> {
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name("quiz-wiz::fetch_worker".to_string())
        .spawn(move || {
            logger::log(&format!(
                "Worker fetching {} questions",
                ticket.request().amount
            ));

            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(Err(GatewayError::Worker(e).into()));
                    return;
                }
            };

            let outcome = rt.block_on(async { load_session(bank.as_ref(), ticket).await });
            match &outcome {
                Ok(session) => logger::log(&format!(
                    "Worker delivering session with {} questions",
                    session.questions_count()
                )),
                Err(e) => logger::log(&format!("Worker fetch failed: {}", e)),
            }
            // receiver dropped means the user left the loading screen
            let _ = tx.send(outcome);
        })
        .map_err(GatewayError::Worker)?;

    Ok(PendingFetch { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfiguration;
    use crate::entry::{check_entry, EntryOutcome};
    use crate::gateway::MockQuestionBank;
    use crate::models::RawQuestion;

    fn ticket() -> FetchTicket {
        match check_entry(&QuizConfiguration::default().to_navigation_params().to_pairs()) {
            EntryOutcome::Fetch(ticket) => ticket,
            EntryOutcome::Redirect => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_worker_delivers_session() {
        let bank = Arc::new(MockQuestionBank::with_questions(vec![RawQuestion::new(
            "Q",
            "A",
            vec!["B".to_string()],
        )]));

        let pending = spawn_fetch_worker(bank.clone(), ticket()).unwrap();
        let session = pending.wait().unwrap();

        assert_eq!(session.questions_count(), 1);
        assert_eq!(bank.request_count(), 1);
    }

    #[test]
    fn test_worker_reports_failure() {
        let bank = Arc::new(MockQuestionBank::failing());
        let pending = spawn_fetch_worker(bank, ticket()).unwrap();
        assert!(matches!(
            pending.wait(),
            Err(EntryError::Gateway(GatewayError::HttpStatus(_)))
        ));
    }

    #[test]
    fn test_poll_eventually_resolves() {
        let bank = Arc::new(MockQuestionBank::with_questions(vec![RawQuestion::new(
            "Q",
            "A",
            vec![],
        )]));
        let pending = spawn_fetch_worker(bank, ticket()).unwrap();

        let mut outcome = None;
        for _ in 0..200 {
            outcome = pending.poll();
            if outcome.is_some() {
                break;
            }
            thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(matches!(outcome, Some(Ok(_))));
    }
}
