//! sqlscan - токенизатор SQL без потерь
//!
//! Разбивает SQL текст на типизированные токены (ключевые слова, идентификаторы,
//! литералы, операторы, комментарии, пробелы) так, что конкатенация токенов
//! в точности восстанавливает исходный текст. Предназначен для форматтеров
//! и подсветки синтаксиса.

pub mod cli;
pub mod common;
pub mod tokenizer;

pub use common::error::{Error, Result};
pub use common::TokenizerConfig;
pub use tokenizer::{Token, TokenKind, Tokenizer};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
