use std::fmt;

pub const MIN_QUESTIONS: u32 = 1;
pub const MAX_QUESTIONS: u32 = 50;
pub const DEFAULT_QUESTIONS: u32 = 5;

/// Category id meaning "no category filter".
pub const ANY_CATEGORY: &str = "0";
/// Type/difficulty id meaning "no filter".
pub const ANY: &str = "any";

pub const PARAM_QUESTION_NUMBER: &str = "questionNumber";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_DIFFICULTY: &str = "difficulty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Category,
    Type,
    Difficulty,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FilterField::Category => "Category",
            FilterField::Type => "Type",
            FilterField::Difficulty => "Difficulty",
        };
        f.write_str(label)
    }
}

/// The user's quiz choices before the quiz starts.
///
/// `question_count` can only hold values in `MIN_QUESTIONS..=MAX_QUESTIONS`;
/// edits outside that range are dropped without touching the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfiguration {
    question_count: u32,
    category: String,
    question_type: String,
    difficulty: String,
}

impl Default for QuizConfiguration {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTIONS,
            category: ANY_CATEGORY.to_string(),
            question_type: ANY.to_string(),
            difficulty: ANY.to_string(),
        }
    }
}

impl QuizConfiguration {
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Returns whether the value was accepted.
    pub fn set_question_count(&mut self, count: i64) -> bool {
        match u32::try_from(count) {
            Ok(count) if (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) => {
                self.question_count = count;
                true
            }
            _ => false,
        }
    }

    /// Same as `set_question_count` but for raw field text; anything that
    /// doesn't parse as an integer is discarded.
    pub fn set_question_count_text(&mut self, input: &str) -> bool {
        match input.trim().parse::<i64>() {
            Ok(count) => self.set_question_count(count),
            Err(_) => false,
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Category => self.category = value,
            FilterField::Type => self.question_type = value,
            FilterField::Difficulty => self.difficulty = value,
        }
    }

    pub fn filter(&self, field: FilterField) -> &str {
        match field {
            FilterField::Category => &self.category,
            FilterField::Type => &self.question_type,
            FilterField::Difficulty => &self.difficulty,
        }
    }

    pub fn to_navigation_params(&self) -> NavigationParams {
        NavigationParams {
            question_number: self.question_count.to_string(),
            category: self.category.clone(),
            question_type: self.question_type.clone(),
            difficulty: self.difficulty.clone(),
        }
    }
}

/// Flat handoff from the configuration form to the quiz screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationParams {
    pub question_number: String,
    pub category: String,
    pub question_type: String,
    pub difficulty: String,
}

impl NavigationParams {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        vec![
            (PARAM_QUESTION_NUMBER.to_string(), self.question_number.clone()),
            (PARAM_CATEGORY.to_string(), self.category.clone()),
            (PARAM_TYPE.to_string(), self.question_type.clone()),
            (PARAM_DIFFICULTY.to_string(), self.difficulty.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = QuizConfiguration::default();
        assert_eq!(config.question_count(), 5);
        assert_eq!(config.filter(FilterField::Category), "0");
        assert_eq!(config.filter(FilterField::Type), "any");
        assert_eq!(config.filter(FilterField::Difficulty), "any");
    }

    #[test]
    fn test_every_valid_count_is_stored() {
        let mut config = QuizConfiguration::default();
        for n in 1..=50 {
            assert!(config.set_question_count(n));
            assert_eq!(config.question_count(), n as u32);
        }
    }

    #[test]
    fn test_out_of_range_count_keeps_prior_value() {
        let mut config = QuizConfiguration::default();
        config.set_question_count(12);

        for n in [0, -1, 51, 1000, i64::MAX, i64::MIN] {
            assert!(!config.set_question_count(n));
            assert_eq!(config.question_count(), 12);
        }
    }

    #[test]
    fn test_non_numeric_text_keeps_prior_value() {
        let mut config = QuizConfiguration::default();
        assert!(config.set_question_count_text("7"));
        assert_eq!(config.question_count(), 7);

        for input in ["", "abc", "NaN", "4.5", "51", "0", "-3"] {
            assert!(!config.set_question_count_text(input));
            assert_eq!(config.question_count(), 7);
        }

        assert!(config.set_question_count_text(" 50 "));
        assert_eq!(config.question_count(), 50);
    }

    #[test]
    fn test_set_filter_is_unconditional() {
        let mut config = QuizConfiguration::default();
        config.set_filter(FilterField::Category, "9");
        config.set_filter(FilterField::Type, "boolean");
        config.set_filter(FilterField::Difficulty, "whatever-id");

        assert_eq!(config.filter(FilterField::Category), "9");
        assert_eq!(config.filter(FilterField::Type), "boolean");
        assert_eq!(config.filter(FilterField::Difficulty), "whatever-id");
    }

    #[test]
    fn test_navigation_params_projection() {
        let mut config = QuizConfiguration::default();
        config.set_question_count(10);
        config.set_filter(FilterField::Difficulty, "hard");

        let params = config.to_navigation_params();
        assert_eq!(
            params.to_pairs(),
            vec![
                ("questionNumber".to_string(), "10".to_string()),
                ("category".to_string(), "0".to_string()),
                ("type".to_string(), "any".to_string()),
                ("difficulty".to_string(), "hard".to_string()),
            ]
        );
        // pure projection
        assert_eq!(config.question_count(), 10);
    }
}
