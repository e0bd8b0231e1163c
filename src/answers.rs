use crate::models::{PresentedQuestion, RawQuestion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The answer order for one question instance.
///
/// The order is a uniform shuffle of `[correct] ++ incorrect`, computed once
/// from a per-question seed and then frozen. Re-reading it never reshuffles; a new
/// question instance gets a new `AnswerSet` and therefore a new seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    correct_answer: String,
    presented: PresentedQuestion,
}

impl AnswerSet {
    pub fn new(question: &RawQuestion) -> Self {
        Self::with_seed(question, rand::random())
    }

    pub fn with_seed(question: &RawQuestion, seed: u64) -> Self {
        let correct_answer = question.decoded_correct_answer();

        let mut answer_choices = Vec::with_capacity(1 + question.incorrect_answers.len());
        answer_choices.push(correct_answer.clone());
        answer_choices.extend(question.decoded_incorrect_answers());

        let mut rng = StdRng::seed_from_u64(seed);
        answer_choices.shuffle(&mut rng);

        Self {
            correct_answer,
            presented: PresentedQuestion {
                text: question.decoded_text(),
                category: crate::utils::decode_entities(&question.category),
                difficulty: question.difficulty.clone(),
                answer_choices,
            },
        }
    }

    pub fn presented(&self) -> &PresentedQuestion {
        &self.presented
    }

    pub fn choices(&self) -> &[String] {
        &self.presented.answer_choices
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }

    pub fn correct_position(&self) -> Option<usize> {
        self.choices()
            .iter()
            .position(|choice| *choice == self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> RawQuestion {
        RawQuestion::new(
            "Which planet is known as the &quot;Red Planet&quot;?",
            "Mars",
            vec![
                "Venus".to_string(),
                "Jupiter".to_string(),
                "Saturn".to_string(),
            ],
        )
    }

    #[test]
    fn test_choices_contain_correct_once_and_all_incorrect() {
        let question = sample_question();
        for seed in 0..200 {
            let set = AnswerSet::with_seed(&question, seed);
            let choices = set.choices();

            assert_eq!(choices.len(), 1 + question.incorrect_answers.len());
            assert_eq!(choices.iter().filter(|c| *c == "Mars").count(), 1);
            for wrong in &question.incorrect_answers {
                assert!(choices.contains(wrong));
            }
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let question = sample_question();
        let a = AnswerSet::with_seed(&question, 42);
        let b = AnswerSet::with_seed(&question, 42);
        assert_eq!(a.choices(), b.choices());
        assert_eq!(a.choices(), a.clone().choices());
    }

    #[test]
    fn test_order_varies_across_seeds() {
        let question = sample_question();
        let first = AnswerSet::with_seed(&question, 0);
        let differs = (1..50).any(|seed| AnswerSet::with_seed(&question, seed).choices() != first.choices());
        assert!(differs);
    }

    #[test]
    fn test_correct_answer_lands_in_every_slot() {
        let question = sample_question();
        let mut seen = [false; 4];
        for seed in 0..500 {
            if let Some(pos) = AnswerSet::with_seed(&question, seed).correct_position() {
                seen[pos] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_text_and_answers_are_decoded() {
        let question = RawQuestion::new(
            "Q&amp;A",
            "Rock &amp; Roll",
            vec!["Don&#039;t know".to_string()],
        );
        let set = AnswerSet::with_seed(&question, 7);
        assert_eq!(set.presented().text, "Q&A");
        assert!(set.is_correct("Rock & Roll"));
        assert!(!set.is_correct("Rock &amp; Roll"));
        assert!(set.choices().contains(&"Don't know".to_string()));
    }

    #[test]
    fn test_boolean_question() {
        let question = RawQuestion::new("The sky is blue.", "True", vec!["False".to_string()]);
        let set = AnswerSet::new(&question);
        assert_eq!(set.choices().len(), 2);
        assert!(set.is_correct("True"));
    }
}
