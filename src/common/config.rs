//! Конфигурация для sqlscan
//!
//! Предоставляет структуры конфигурации токенизатора, кэша и логирования

use crate::common::constants::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_PREFIX_SIZE, DEFAULT_LOG_LEVEL, ENV_PREFIX,
};
use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Основная конфигурация токенизатора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// TOML файл со словарем диалекта (если не задан, используется стандартный)
    pub vocabulary_file: Option<PathBuf>,
    /// Настройки кэша предпросмотра
    pub cache: CacheConfig,
    /// Настройки логирования
    pub logging: LoggingConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocabulary_file: None,
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Конфигурация кэша предпросмотра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Включить кэш
    pub enabled: bool,
    /// Длина префикса ключа в символах
    pub prefix_size: usize,
    /// Максимальное количество записей
    pub capacity: usize,
    /// Учитывать категорию предыдущего токена в ключе
    pub context_aware: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix_size: DEFAULT_CACHE_PREFIX_SIZE,
            capacity: DEFAULT_CACHE_CAPACITY,
            context_aware: true,
        }
    }
}

/// Конфигурация логирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень логирования
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl TokenizerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TokenizerConfig = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::configuration(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(std::env::vars())
    }

    /// Применяет переопределения вида `SQLSCAN_*`
    pub fn with_overrides<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let value = value.as_ref().trim();

            match name {
                "CACHE_ENABLED" => self.cache.enabled = parse_value(name, value)?,
                "CACHE_PREFIX_SIZE" => self.cache.prefix_size = parse_value(name, value)?,
                "CACHE_CAPACITY" => self.cache.capacity = parse_value(name, value)?,
                "CACHE_CONTEXT_AWARE" => self.cache.context_aware = parse_value(name, value)?,
                "LOG_LEVEL" => self.logging.level = value.to_string(),
                "VOCABULARY" => self.vocabulary_file = Some(PathBuf::from(value)),
                _ => {}
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        if self.cache.prefix_size == 0 {
            return Err(Error::configuration(
                "cache prefix size must be greater than 0",
            ));
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(Error::configuration(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        Error::configuration(format!("invalid value '{}' for {}{}", value, ENV_PREFIX, name))
    })
}
