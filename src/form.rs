use crate::config::{FilterField, QuizConfiguration};
use crate::models::{any_category, difficulty_choices, type_choices, Choice};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    QuestionCount,
    Filter(FilterField),
    Start,
}

const FIELD_ORDER: [FormField; 5] = [
    FormField::QuestionCount,
    FormField::Filter(FilterField::Category),
    FormField::Filter(FilterField::Type),
    FormField::Filter(FilterField::Difficulty),
    FormField::Start,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit,
    Quit,
}

/// Configuration screen state: the model plus the option lists and focus.
#[derive(Debug, Clone)]
pub struct ConfigForm {
    pub config: QuizConfiguration,
    pub categories: Vec<Choice>,
    pub types: Vec<Choice>,
    pub difficulties: Vec<Choice>,
    pub focused: usize,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ConfigForm {
    /// "Any Category" is always offered first, ahead of `categories`.
    pub fn new(categories: Vec<Choice>) -> Self {
        let mut all = vec![any_category()];
        all.extend(categories.into_iter().filter(|c| c.id != any_category().id));
        Self {
            config: QuizConfiguration::default(),
            categories: all,
            types: type_choices(),
            difficulties: difficulty_choices(),
            focused: 0,
        }
    }

    pub fn focused_field(&self) -> FormField {
        FIELD_ORDER[self.focused]
    }

    pub fn options(&self, field: FilterField) -> &[Choice] {
        match field {
            FilterField::Category => &self.categories,
            FilterField::Type => &self.types,
            FilterField::Difficulty => &self.difficulties,
        }
    }

    /// Display name of the current selection for `field`.
    pub fn selected_name(&self, field: FilterField) -> &str {
        let id = self.config.filter(field);
        self.options(field)
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(id)
    }

    fn cycle_filter(&mut self, field: FilterField, forward: bool) {
        let options = self.options(field);
        if options.is_empty() {
            return;
        }
        let len = options.len();
        let current = options
            .iter()
            .position(|c| c.id == self.config.filter(field))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let id = options[next].id.clone();
        self.config.set_filter(field, id);
    }

    fn edit_count(&mut self, key: KeyCode) {
        let current = self.config.question_count();
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.config.set_question_count_text(&format!("{}{}", current, c));
            }
            KeyCode::Backspace => {
                let mut text = current.to_string();
                text.pop();
                self.config.set_question_count_text(&text);
            }
            KeyCode::Right | KeyCode::Char('+') => {
                self.config.set_question_count(i64::from(current) + 1);
            }
            KeyCode::Left | KeyCode::Char('-') => {
                self.config.set_question_count(i64::from(current) - 1);
            }
            _ => {}
        }
    }
}

pub fn handle_form_input(form: &mut ConfigForm, key: KeyEvent) -> FormAction {
    match key.code {
        KeyCode::Esc => return FormAction::Quit,
        KeyCode::Up => {
            form.focused = form.focused.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Tab => {
            if form.focused < FIELD_ORDER.len() - 1 {
                form.focused += 1;
            }
        }
        KeyCode::Enter => return FormAction::Submit,
        code => match form.focused_field() {
            FormField::QuestionCount => form.edit_count(code),
            FormField::Filter(field) => match code {
                KeyCode::Right => form.cycle_filter(field, true),
                KeyCode::Left => form.cycle_filter(field, false),
                _ => {}
            },
            FormField::Start => {}
        },
    }
    FormAction::None
}
