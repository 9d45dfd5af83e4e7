//! Тесты токенизатора

pub mod lexer_tests;

use crate::tokenizer::{Token, TokenKind};

/// Пары (тип, текст) для компактных сравнений
pub(crate) fn lexemes(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
}

/// Конкатенация текстов токенов
pub(crate) fn rebuild(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
