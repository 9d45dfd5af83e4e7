//! Токенизатор SQL для sqlscan
//!
//! Преобразует SQL текст в последовательность токенов без потерь: конкатенация
//! текстов токенов в порядке выдачи совпадает со входом.

use crate::common::{Error, Result, TokenizerConfig};
use crate::tokenizer::cache::{CacheStats, LookaheadCache};
use crate::tokenizer::context::{KeywordPolicy, StandardKeywordPolicy};
use crate::tokenizer::pipeline::{Classified, ClassifierPipeline};
use crate::tokenizer::token::{Position, Token};
use crate::tokenizer::vocabulary::{CompiledVocabulary, WordLists};
use rayon::prelude::*;
use std::sync::Arc;

/// Фаза сканирования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Scanning,
    Emitting,
    Done,
    /// Классификатор вернул токен, не продвигающий сканирование
    Stalled,
}

/// Состояние одного вызова `tokenize`
#[derive(Debug)]
pub struct ScanState<'a> {
    input: &'a str,
    consumed: usize,
    position: Position,
    emitted: Vec<Token>,
    phase: ScanPhase,
}

impl<'a> ScanState<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            consumed: 0,
            position: Position::start(),
            emitted: Vec::new(),
            phase: if input.is_empty() {
                ScanPhase::Done
            } else {
                ScanPhase::Scanning
            },
        }
    }

    /// Непрочитанный остаток входа
    pub fn remaining(&self) -> &'a str {
        &self.input[self.consumed..]
    }

    /// Количество непрочитанных байт
    pub fn remaining_len(&self) -> usize {
        self.input.len() - self.consumed
    }

    pub fn previous(&self) -> Option<&Token> {
        self.emitted.last()
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Принимает очередной токен и проверяет, что сканирование продвинулось
    pub fn emit(&mut self, classified: Classified) -> Result<()> {
        let Classified { token, matcher } = classified;
        self.phase = ScanPhase::Emitting;

        if token.text.is_empty() {
            self.phase = ScanPhase::Stalled;
            log::warn!(
                "Сканирование остановлено на позиции {}: '{}' вернул пустой токен",
                self.position,
                matcher
            );
            return Err(Error::stalled(self.consumed, matcher));
        }

        if !self.remaining().starts_with(token.text.as_str()) {
            self.phase = ScanPhase::Stalled;
            return Err(Error::contract_violation(format!(
                "matcher '{}' produced {:?} which is not a prefix of the input at {}",
                matcher, token.text, self.position
            )));
        }

        let token = token.at(self.position);
        log::trace!("{} <- {}", token, matcher);

        self.position = self.position.advanced_by(&token.text);
        self.consumed += token.text.len();
        self.emitted.push(token);

        self.phase = if self.remaining_len() == 0 {
            ScanPhase::Done
        } else {
            ScanPhase::Scanning
        };
        Ok(())
    }

    pub fn finish(self) -> Vec<Token> {
        self.emitted
    }
}

/// Токенизатор SQL
///
/// Словарь и конвейер неизменяемы после создания; кэш потокобезопасен, поэтому
/// один экземпляр можно разделять между потоками.
#[derive(Debug)]
pub struct Tokenizer {
    vocabulary: Arc<CompiledVocabulary>,
    pipeline: ClassifierPipeline,
    cache: LookaheadCache,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Создает токенизатор со стандартным словарем и настройками по умолчанию
    pub fn new() -> Result<Self> {
        Self::with_config(TokenizerConfig::default())
    }

    /// Создает токенизатор по конфигурации; словарь берется из `vocabulary_file`,
    /// если он задан
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        let lists = match &config.vocabulary_file {
            Some(path) => WordLists::from_file(path)?,
            None => WordLists::standard(),
        };
        Self::from_word_lists(&lists, config)
    }

    /// Создает токенизатор для указанных списков слов
    pub fn from_word_lists(lists: &WordLists, config: TokenizerConfig) -> Result<Self> {
        Self::with_policy(lists, Arc::new(StandardKeywordPolicy), config)
    }

    /// Создает токенизатор с собственной политикой ключевых слов
    pub fn with_policy(
        lists: &WordLists,
        policy: Arc<dyn KeywordPolicy>,
        config: TokenizerConfig,
    ) -> Result<Self> {
        let vocabulary = Arc::new(CompiledVocabulary::build(lists)?);
        let pipeline = ClassifierPipeline::standard(Arc::clone(&vocabulary), policy)?;
        Self::with_pipeline(vocabulary, pipeline, config)
    }

    /// Создает токенизатор с произвольным конвейером классификаторов
    pub fn with_pipeline(
        vocabulary: Arc<CompiledVocabulary>,
        pipeline: ClassifierPipeline,
        config: TokenizerConfig,
    ) -> Result<Self> {
        config.validate()?;
        if pipeline.is_empty() {
            return Err(Error::configuration("classifier pipeline is empty"));
        }

        Ok(Self {
            vocabulary,
            pipeline,
            cache: LookaheadCache::new(&config.cache),
            config,
        })
    }

    /// Разбивает SQL текст на токены
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        let mut state = ScanState::new(input);

        while state.phase() == ScanPhase::Scanning {
            let remaining = state.remaining();
            let previous = state.previous();
            let classified = self.cache.get_or_classify(remaining, previous, || {
                self.pipeline.classify(remaining, previous)
            })?;
            state.emit(classified)?;
        }

        let tokens = state.finish();
        log::debug!(
            "Токенизировано {} байт: {} токенов",
            input.len(),
            tokens.len()
        );
        Ok(tokens)
    }

    /// Токенизирует несколько входов параллельно на одном экземпляре
    pub fn tokenize_batch<S>(&self, inputs: &[S]) -> Vec<Result<Vec<Token>>>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<Result<Vec<Token>>> = inputs
            .par_iter()
            .map(|input| self.tokenize(input.as_ref()))
            .collect();

        let stats = self.cache.stats();
        log::debug!(
            "Пакет из {} запросов обработан, попаданий в кэш: {:.1}%",
            inputs.len(),
            stats.hit_ratio() * 100.0
        );
        results
    }

    pub fn vocabulary(&self) -> &CompiledVocabulary {
        &self.vocabulary
    }

    pub fn pipeline(&self) -> &ClassifierPipeline {
        &self.pipeline
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
