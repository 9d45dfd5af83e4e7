//! Контекст предыдущего токена и политика классификации ключевых слов

use crate::tokenizer::token::{Token, TokenKind};
use crate::tokenizer::vocabulary::KeywordCategory;
use std::fmt;

/// Грубая категория предыдущего токена
///
/// Встроенные классификаторы смотрят на предыдущий токен только через эту
/// категорию, поэтому она же входит в ключ кэша предпросмотра.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenContext {
    /// Начало входа
    Start,
    /// Сразу после `.` (квалифицированное имя)
    Qualifier,
    /// После операнда: слова, литерала, переменной или закрывающей скобки
    Operand,
    /// Все остальное
    Other,
}

impl TokenContext {
    pub fn of(previous: Option<&Token>) -> Self {
        let Some(token) = previous else {
            return TokenContext::Start;
        };

        match token.kind {
            TokenKind::Boundary => match token.text.as_str() {
                "." => TokenContext::Qualifier,
                ")" | "]" => TokenContext::Operand,
                _ => TokenContext::Other,
            },
            TokenKind::Word
            | TokenKind::Quote
            | TokenKind::BacktickQuote
            | TokenKind::Number
            | TokenKind::Variable => TokenContext::Operand,
            _ => TokenContext::Other,
        }
    }
}

impl fmt::Display for TokenContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenContext::Start => "start",
            TokenContext::Qualifier => "qualifier",
            TokenContext::Operand => "operand",
            TokenContext::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// Правило диалекта, определяющее вид найденного ключевого слова
///
/// `None` означает, что в данном контексте слово не считается зарезервированным
/// и классификация продолжается следующими классификаторами.
pub trait KeywordPolicy: Send + Sync + fmt::Debug {
    fn resolve(&self, category: KeywordCategory, context: TokenContext) -> Option<TokenKind>;
}

/// Стандартная политика: после `.` ключевых слов не бывает (`t.from` это имя колонки)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKeywordPolicy;

impl KeywordPolicy for StandardKeywordPolicy {
    fn resolve(&self, category: KeywordCategory, context: TokenContext) -> Option<TokenKind> {
        if context == TokenContext::Qualifier {
            return None;
        }

        Some(match category {
            KeywordCategory::TopLevel => TokenKind::ReservedTopLevel,
            KeywordCategory::Newline => TokenKind::ReservedNewline,
            KeywordCategory::Plain => TokenKind::Reserved,
        })
    }
}
