//! Упорядоченный конвейер классификаторов
//!
//! Порядок классификаторов входит в контракт: побеждает первый успешный,
//! даже если более поздний распознал бы более длинный фрагмент.

use crate::common::{Error, Result};
use crate::tokenizer::context::{KeywordPolicy, StandardKeywordPolicy};
use crate::tokenizer::matchers::{
    BoundaryMatcher, CommentMatcher, FunctionMatcher, Matcher, NumeralMatcher, QuoteMatcher,
    ReservedMatcher, VariableMatcher, WhitespaceMatcher, WordMatcher,
};
use crate::tokenizer::token::Token;
use crate::tokenizer::vocabulary::CompiledVocabulary;
use std::sync::Arc;

/// Результат классификации вместе с именем сработавшего классификатора
#[derive(Debug, Clone)]
pub struct Classified {
    pub token: Token,
    pub matcher: &'static str,
}

/// Конвейер классификаторов
pub struct ClassifierPipeline {
    matchers: Vec<Box<dyn Matcher>>,
}

impl ClassifierPipeline {
    /// Создает конвейер с явным порядком классификаторов
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Стандартный порядок: пробелы, комментарии, строки, переменные, числа,
    /// разделители, зарезервированные слова, функции, слова
    pub fn standard(
        vocabulary: Arc<CompiledVocabulary>,
        policy: Arc<dyn KeywordPolicy>,
    ) -> Result<Self> {
        let matchers: Vec<Box<dyn Matcher>> = vec![
            Box::new(WhitespaceMatcher),
            Box::new(CommentMatcher),
            Box::new(QuoteMatcher),
            Box::new(VariableMatcher),
            Box::new(NumeralMatcher::new(&vocabulary)?),
            Box::new(BoundaryMatcher::new(Arc::clone(&vocabulary))),
            Box::new(ReservedMatcher::new(Arc::clone(&vocabulary), policy)),
            Box::new(FunctionMatcher::new(Arc::clone(&vocabulary))),
            Box::new(WordMatcher),
        ];
        Ok(Self::new(matchers))
    }

    /// Стандартный конвейер со стандартной политикой ключевых слов
    pub fn with_vocabulary(vocabulary: Arc<CompiledVocabulary>) -> Result<Self> {
        Self::standard(vocabulary, Arc::new(StandardKeywordPolicy))
    }

    /// Классифицирует начало остатка входа
    pub fn classify(&self, remaining: &str, previous: Option<&Token>) -> Result<Classified> {
        for matcher in &self.matchers {
            if let Some(token) = matcher.try_match(remaining, previous) {
                return Ok(Classified {
                    token,
                    matcher: matcher.name(),
                });
            }
        }

        Err(Error::contract_violation(format!(
            "no matcher claimed input starting with {:?}",
            remaining.chars().take(16).collect::<String>()
        )))
    }

    /// Имена классификаторов в порядке приоритета
    pub fn matcher_names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl std::fmt::Debug for ClassifierPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierPipeline")
            .field("matchers", &self.matcher_names())
            .finish()
    }
}
