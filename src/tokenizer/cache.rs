//! Кэш предпросмотра
//!
//! Запоминает результат классификации для первых N символов остатка входа.
//! Сохраняются только токены короче N символов: более длинный токен нельзя
//! отличить от другого токена с тем же началом.

use crate::common::{CacheConfig, Result};
use crate::tokenizer::context::TokenContext;
use crate::tokenizer::pipeline::Classified;
use crate::tokenizer::token::Token;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Имя источника для токенов, взятых из кэша
pub const CACHE_SOURCE: &str = "cache";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    prefix: String,
    context: Option<TokenContext>,
}

/// Статистика кэша
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Доля попаданий среди всех обращений
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Потокобезопасный кэш классификации, общий для всех вызовов токенизатора
#[derive(Debug)]
pub struct LookaheadCache {
    enabled: bool,
    prefix_size: usize,
    capacity: usize,
    context_aware: bool,
    entries: DashMap<CacheKey, Token>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LookaheadCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            enabled: config.enabled,
            prefix_size: config.prefix_size,
            capacity: config.capacity,
            context_aware: config.context_aware,
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn prefix_size(&self) -> usize {
        self.prefix_size
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Возвращает токен из кэша или классифицирует и, если можно, запоминает результат
    pub fn get_or_classify<F>(
        &self,
        remaining: &str,
        previous: Option<&Token>,
        classify: F,
    ) -> Result<Classified>
    where
        F: FnOnce() -> Result<Classified>,
    {
        let key = self.key(remaining, previous);

        if let Some(key) = &key {
            if let Some(entry) = self.entries.get(key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(Classified {
                    token: entry.value().clone(),
                    matcher: CACHE_SOURCE,
                });
            }
        }

        let classified = classify()?;
        self.misses.fetch_add(1, Ordering::Relaxed);

        if let Some(key) = key {
            if classified.token.char_len() < self.prefix_size && self.entries.len() < self.capacity
            {
                self.entries.insert(key, classified.token.clone());
            }
        }

        Ok(classified)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    /// Очищает записи и счетчики
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    fn key(&self, remaining: &str, previous: Option<&Token>) -> Option<CacheKey> {
        if !self.enabled {
            return None;
        }

        let end = prefix_end(remaining, self.prefix_size)?;
        Some(CacheKey {
            prefix: remaining[..end].to_string(),
            context: self.context_aware.then(|| TokenContext::of(previous)),
        })
    }
}

/// Байтовая граница первых `chars` символов; `None`, если вход короче
fn prefix_end(input: &str, chars: usize) -> Option<usize> {
    let mut count = 0;
    for (index, _) in input.char_indices() {
        if count == chars {
            return Some(index);
        }
        count += 1;
    }
    (count == chars).then_some(input.len())
}
