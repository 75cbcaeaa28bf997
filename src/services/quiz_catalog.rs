use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::{
    constants::debug_questions::debug_questions,
    errors::{AppError, AppResult},
    models::domain::QuestionDefinition,
};

static BUILTIN: Lazy<QuizCatalog> = Lazy::new(|| {
    QuizCatalog::new(debug_questions()).expect("built-in debug questions have unique ids")
});

/// Read-only question table, keyed by id, in authoring order.
#[derive(Clone, Debug)]
pub struct QuizCatalog {
    questions: Vec<QuestionDefinition>,
    index: HashMap<String, usize>,
}

impl QuizCatalog {
    pub fn new(questions: Vec<QuestionDefinition>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Question at position {} has an empty id",
                    position
                )));
            }
            if index.insert(question.id.clone(), position).is_some() {
                return Err(AppError::ValidationError(format!(
                    "Duplicate question id '{}'",
                    question.id
                )));
            }
        }

        Ok(Self { questions, index })
    }

    /// The debug quiz that ships with the playground.
    pub fn builtin() -> &'static QuizCatalog {
        &BUILTIN
    }

    pub fn lookup(&self, id: &str) -> Option<&QuestionDefinition> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn get(&self, id: &str) -> AppResult<&QuestionDefinition> {
        self.lookup(id)
            .ok_or_else(|| AppError::NotFound(format!("Question with id '{}' not found", id)))
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn max_points(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.points)).sum()
    }
}
