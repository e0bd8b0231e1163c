use crate::config::{
    NavigationParams, PARAM_CATEGORY, PARAM_DIFFICULTY, PARAM_QUESTION_NUMBER, PARAM_TYPE,
};
use crate::error::EntryError;
use crate::gateway::{QuestionBank, QuestionRequest};
use crate::logger;
use crate::session::QuizSession;

/// Permission to hit the question bank exactly once.
///
/// Only `check_entry` creates one and `load_session` consumes it, so a
/// session can never be backed by two fetches.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    request: QuestionRequest,
}

impl FetchTicket {
    pub fn request(&self) -> &QuestionRequest {
        &self.request
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// No usable configuration arrived; go back to the form.
    Redirect,
    Fetch(FetchTicket),
}

/// Quiz-entry guard over the raw navigation pairs.
pub fn check_entry(query: &[(String, String)]) -> EntryOutcome {
    let lookup = |key: &str| {
        query
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };

    let category = lookup(PARAM_CATEGORY);
    if category.trim().is_empty() {
        logger::log("Quiz entry without category, redirecting to form");
        return EntryOutcome::Redirect;
    }

    let params = NavigationParams {
        question_number: lookup(PARAM_QUESTION_NUMBER),
        category,
        question_type: lookup(PARAM_TYPE),
        difficulty: lookup(PARAM_DIFFICULTY),
    };

    match QuestionRequest::from_params(&params) {
        Some(request) => EntryOutcome::Fetch(FetchTicket { request }),
        None => {
            logger::log(&format!(
                "Quiz entry with unusable question number {:?}, redirecting to form",
                params.question_number
            ));
            EntryOutcome::Redirect
        }
    }
}

/// Run the single fetch and build a session from whatever came back.
pub async fn load_session(
    bank: &dyn QuestionBank,
    ticket: FetchTicket,
) -> Result<QuizSession, EntryError> {
    let questions = bank.fetch_questions(&ticket.request).await?;
    Ok(QuizSession::new(questions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfiguration;
    use crate::error::GatewayError;
    use crate::gateway::MockQuestionBank;
    use crate::models::RawQuestion;

    fn questions(count: usize) -> Vec<RawQuestion> {
        (1..=count)
            .map(|n| RawQuestion::new(format!("Q{}", n), "yes", vec!["no".to_string()]))
            .collect()
    }

    #[test]
    fn test_missing_category_redirects() {
        assert_eq!(check_entry(&[]), EntryOutcome::Redirect);

        let query = vec![
            ("questionNumber".to_string(), "5".to_string()),
            ("category".to_string(), "".to_string()),
        ];
        assert_eq!(check_entry(&query), EntryOutcome::Redirect);
    }

    #[test]
    fn test_any_category_is_still_a_configuration() {
        let query = QuizConfiguration::default().to_navigation_params().to_pairs();
        match check_entry(&query) {
            EntryOutcome::Fetch(ticket) => {
                assert_eq!(ticket.request().amount, 5);
                assert_eq!(ticket.request().category, None);
            }
            EntryOutcome::Redirect => panic!("default configuration should fetch"),
        }
    }

    #[test]
    fn test_unusable_count_redirects() {
        let query = vec![
            ("questionNumber".to_string(), "lots".to_string()),
            ("category".to_string(), "9".to_string()),
        ];
        assert_eq!(check_entry(&query), EntryOutcome::Redirect);
    }

    #[tokio::test]
    async fn test_load_session_uses_returned_length() {
        let bank = MockQuestionBank::with_questions(questions(2));
        let mut config = QuizConfiguration::default();
        config.set_question_count(5);

        let EntryOutcome::Fetch(ticket) = check_entry(&config.to_navigation_params().to_pairs())
        else {
            panic!("expected fetch");
        };
        let session = load_session(&bank, ticket).await.unwrap();

        assert_eq!(session.questions_count(), 2);
        assert_eq!(bank.request_count(), 1);
        assert_eq!(bank.requests.lock().unwrap()[0].amount, 5);
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let bank = MockQuestionBank::failing();
        let EntryOutcome::Fetch(ticket) =
            check_entry(&QuizConfiguration::default().to_navigation_params().to_pairs())
        else {
            panic!("expected fetch");
        };

        let err = load_session(&bank, ticket).await.unwrap_err();
        assert!(matches!(err, EntryError::Gateway(GatewayError::HttpStatus(_))));
    }

    #[tokio::test]
    async fn test_empty_bank_never_builds_session() {
        let bank = MockQuestionBank::with_questions(Vec::new());
        let EntryOutcome::Fetch(ticket) =
            check_entry(&QuizConfiguration::default().to_navigation_params().to_pairs())
        else {
            panic!("expected fetch");
        };

        let err = load_session(&bank, ticket).await.unwrap_err();
        assert!(matches!(err, EntryError::Gateway(GatewayError::Empty)));
    }
}
