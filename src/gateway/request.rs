use crate::config::{ANY, ANY_CATEGORY, MAX_QUESTIONS, MIN_QUESTIONS, NavigationParams};

/// Query sent to the question bank. Filters left at their "any" value are
/// omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub amount: u32,
    pub category: Option<String>,
    pub question_type: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionRequest {
    /// `None` when `question_number` isn't a count the form could have produced.
    pub fn from_params(params: &NavigationParams) -> Option<Self> {
        let amount = params.question_number.trim().parse::<u32>().ok()?;
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&amount) {
            return None;
        }

        Some(Self {
            amount,
            category: filter_value(&params.category, ANY_CATEGORY),
            question_type: filter_value(&params.question_type, ANY),
            difficulty: filter_value(&params.difficulty, ANY),
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("amount", self.amount.to_string())];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(question_type) = &self.question_type {
            pairs.push(("type", question_type.clone()));
        }
        if let Some(difficulty) = &self.difficulty {
            pairs.push(("difficulty", difficulty.clone()));
        }
        pairs
    }
}

fn filter_value(value: &str, any: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == any {
        None
    } else {
        Some(value.to_string())
    }
}
