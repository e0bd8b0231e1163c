use crate::error::GatewayError;
use crate::models::{Choice, RawQuestion};
use crate::utils::decode_entities;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

impl QuestionsResponse {
    /// Whatever came back is accepted, even if shorter than requested. An
    /// empty list is an error, carrying the bank's response code when it
    /// gave one.
    pub fn into_questions(self) -> Result<Vec<RawQuestion>, GatewayError> {
        if !self.results.is_empty() {
            return Ok(self.results);
        }
        match self.response_code {
            0 => Err(GatewayError::Empty),
            code => Err(GatewayError::ResponseCode {
                code,
                reason: response_code_reason(code),
            }),
        }
    }
}

pub fn response_code_reason(code: u8) -> &'static str {
    match code {
        0 => "success",
        1 => "not enough questions for this query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited",
        _ => "unknown response code",
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub trivia_categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRecord {
    pub id: u32,
    pub name: String,
}

impl CategoriesResponse {
    pub fn into_choices(self) -> Vec<Choice> {
        self.trivia_categories
            .into_iter()
            .map(|record| Choice::new(record.id.to_string(), decode_entities(&record.name)))
            .collect()
    }
}
