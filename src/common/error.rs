//! Обработка ошибок для sqlscan
//!
//! Некорректный SQL никогда не приводит к ошибке: нераспознанные символы
//! превращаются в токены `Error`. Ошибки этого модуля означают либо проблемы
//! конструирования (словарь, конфигурация), либо нарушение инвариантов движка.

use thiserror::Error;

/// Основной тип ошибки для sqlscan
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка компиляции регулярного выражения
    #[error("Pattern compilation error: {0}")]
    Pattern(#[from] regex::Error),

    /// Некорректный словарь (пустые слова и т.п.)
    #[error("Vocabulary error: {message}")]
    Vocabulary { message: String },

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Классификатор вернул токен нулевой длины
    #[error("Scanner stalled at byte {offset}: matcher '{matcher}' produced an empty token")]
    Stalled { offset: usize, matcher: String },

    /// Нарушен контракт классификатора
    #[error("Matcher contract violation: {message}")]
    ContractViolation { message: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для sqlscan
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку словаря
    pub fn vocabulary(message: impl Into<String>) -> Self {
        Self::Vocabulary {
            message: message.into(),
        }
    }

    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку остановки сканера
    pub fn stalled(offset: usize, matcher: impl Into<String>) -> Self {
        Self::Stalled {
            offset,
            matcher: matcher.into(),
        }
    }

    /// Создает ошибку нарушения контракта классификатора
    pub fn contract_violation(message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
        }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Проверяет, является ли ошибка дефектом движка, а не проблемой входных данных
    pub fn is_engine_defect(&self) -> bool {
        matches!(
            self,
            Error::Stalled { .. } | Error::ContractViolation { .. } | Error::Internal { .. }
        )
    }
}
