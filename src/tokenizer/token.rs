//! Токены SQL токенизатора sqlscan
//!
//! Токен хранит точную подстроку исходного текста: пробелы и комментарии
//! сохраняются без изменений, чтобы форматтер мог восстановить запрос.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Смещение в байтах от начала входа
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Возвращает позицию сразу после указанного текста
    pub fn advanced_by(&self, text: &str) -> Self {
        let mut next = *self;
        for ch in text.chars() {
            if ch == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next.offset += text.len();
        next
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Типы токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Последовательность пробельных символов
    Whitespace,
    /// Идентификатор или прочее слово
    Word,
    /// Строка в одинарных или двойных кавычках
    Quote,
    /// Идентификатор в обратных кавычках
    BacktickQuote,
    /// Зарезервированное слово
    Reserved,
    /// Ключевое слово, начинающее новую секцию запроса (SELECT, FROM, ...)
    ReservedTopLevel,
    /// Ключевое слово, начинающее новую строку (AND, JOIN, ...)
    ReservedNewline,
    /// Пунктуация и операторы
    Boundary,
    /// Однострочный комментарий
    Comment,
    /// Многострочный комментарий
    BlockComment,
    /// Числовой литерал
    Number,
    /// Нераспознанный символ
    Error,
    /// Пользовательская переменная (@var, :param)
    Variable,
}

impl TokenKind {
    /// Проверяет, является ли токен зарезервированным словом любого вида
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Reserved | TokenKind::ReservedTopLevel | TokenKind::ReservedNewline
        )
    }

    /// Проверяет, является ли токен комментарием
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::BlockComment)
    }

    /// Проверяет, является ли токен литералом
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Quote | TokenKind::Number)
    }

    /// Проверяет, следует ли пропустить токен при анализе
    pub fn should_skip(&self) -> bool {
        matches!(self, TokenKind::Whitespace) || self.is_comment()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Word => "WORD",
            TokenKind::Quote => "QUOTE",
            TokenKind::BacktickQuote => "BACKTICK_QUOTE",
            TokenKind::Reserved => "RESERVED",
            TokenKind::ReservedTopLevel => "RESERVED_TOPLEVEL",
            TokenKind::ReservedNewline => "RESERVED_NEWLINE",
            TokenKind::Boundary => "BOUNDARY",
            TokenKind::Comment => "COMMENT",
            TokenKind::BlockComment => "BLOCK_COMMENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Error => "ERROR",
            TokenKind::Variable => "VARIABLE",
        };
        write!(f, "{}", name)
    }
}

/// Токен с типом, текстом и позицией
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Слово является вызовом известной функции (за ним следует `(`)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub function_call: bool,
    pub position: Position,
}

impl Token {
    /// Создает токен; позицию проставляет сканер
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            function_call: false,
            position: Position::start(),
        }
    }

    /// Создает слово, помеченное как вызов функции
    pub fn function(text: impl Into<String>) -> Self {
        Self {
            function_call: true,
            ..Self::new(TokenKind::Word, text)
        }
    }

    /// Возвращает копию токена с указанной позицией
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Длина токена в символах
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Проверяет тип и текст без учета позиции
    pub fn same_lexeme(&self, other: &Token) -> bool {
        self.kind == other.kind
            && self.text == other.text
            && self.function_call == other.function_call
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.text, self.position)
    }
}
