//! Классификаторы токенов
//!
//! Каждый классификатор получает остаток входа и предыдущий токен и либо
//! возвращает токен, начинающийся в начале остатка, либо отказывается.
//! Классификаторы не имеют изменяемого состояния.

use crate::common::Result;
use crate::tokenizer::context::{KeywordPolicy, TokenContext};
use crate::tokenizer::token::{Token, TokenKind};
use crate::tokenizer::vocabulary::{CompiledVocabulary, KeywordCategory};
use regex::Regex;
use std::sync::Arc;

/// Классификатор одного вида токенов
pub trait Matcher: Send + Sync {
    /// Имя для диагностики
    fn name(&self) -> &'static str;

    /// Пытается распознать токен в начале `remaining`
    ///
    /// Текст возвращаемого токена обязан быть непустым префиксом `remaining`.
    fn try_match(&self, remaining: &str, previous: Option<&Token>) -> Option<Token>;
}

/// Максимальная последовательность пробельных символов
#[derive(Debug, Default)]
pub struct WhitespaceMatcher;

impl Matcher for WhitespaceMatcher {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        let end = prefix_len(remaining, char::is_whitespace);
        (end > 0).then(|| Token::new(TokenKind::Whitespace, &remaining[..end]))
    }
}

/// Комментарии `-- ...`, `# ...` и `/* ... */`
#[derive(Debug, Default)]
pub struct CommentMatcher;

impl Matcher for CommentMatcher {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        if remaining.starts_with("--") || remaining.starts_with('#') {
            // Перевод строки не входит в комментарий
            let end = remaining.find('\n').unwrap_or(remaining.len());
            return Some(Token::new(TokenKind::Comment, &remaining[..end]));
        }

        if remaining.starts_with("/*") {
            let end = remaining[2..]
                .find("*/")
                .map(|pos| pos + 4)
                .unwrap_or(remaining.len());
            return Some(Token::new(TokenKind::BlockComment, &remaining[..end]));
        }

        None
    }
}

/// Строки в кавычках: `'...'`, `"..."` и `` `...` ``
#[derive(Debug, Default)]
pub struct QuoteMatcher;

impl Matcher for QuoteMatcher {
    fn name(&self) -> &'static str {
        "quote"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        let end = quoted_len(remaining)?;
        let kind = if remaining.starts_with('`') {
            TokenKind::BacktickQuote
        } else {
            TokenKind::Quote
        };
        Some(Token::new(kind, &remaining[..end]))
    }
}

/// Пользовательские переменные: `@name`, `@@system.var`, `:param`, `@"quoted name"`
#[derive(Debug, Default)]
pub struct VariableMatcher;

impl Matcher for VariableMatcher {
    fn name(&self) -> &'static str {
        "variable"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        let sigil = if remaining.starts_with("@@") {
            2
        } else if remaining.starts_with('@') || remaining.starts_with(':') {
            1
        } else {
            return None;
        };

        let name = &remaining[sigil..];
        let name_len = if name.starts_with(['\'', '"', '`']) {
            quoted_len(name)?
        } else {
            prefix_len(name, |c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$'))
        };

        (name_len > 0).then(|| Token::new(TokenKind::Variable, &remaining[..sigil + name_len]))
    }
}

/// Числовые литералы: десятичные с дробью и экспонентой, `0x..`, `0b..`
///
/// Знак `-` входит в число только если предыдущий токен не является операндом,
/// иначе `a-1` превратилось бы в `a` и `-1`.
#[derive(Debug)]
pub struct NumeralMatcher {
    pattern: Regex,
}

impl NumeralMatcher {
    pub fn new(vocabulary: &CompiledVocabulary) -> Result<Self> {
        let source = format!(
            r"^(-?(?:0x[0-9a-fA-F]+|0b[01]+|[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?)){}",
            vocabulary.terminator()
        );
        Ok(Self {
            pattern: Regex::new(&source)?,
        })
    }
}

impl Matcher for NumeralMatcher {
    fn name(&self) -> &'static str {
        "numeral"
    }

    fn try_match(&self, remaining: &str, previous: Option<&Token>) -> Option<Token> {
        if remaining.starts_with('-') && TokenContext::of(previous) == TokenContext::Operand {
            return None;
        }

        let number = self.pattern.captures(remaining)?.get(1)?;
        Some(Token::new(TokenKind::Number, &remaining[..number.end()]))
    }
}

/// Пунктуация и операторы из словаря (самый длинный вариант)
#[derive(Debug)]
pub struct BoundaryMatcher {
    vocabulary: Arc<CompiledVocabulary>,
}

impl BoundaryMatcher {
    pub fn new(vocabulary: Arc<CompiledVocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl Matcher for BoundaryMatcher {
    fn name(&self) -> &'static str {
        "boundary"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        self.vocabulary
            .match_boundary(remaining)
            .map(|text| Token::new(TokenKind::Boundary, text))
    }
}

/// Зарезервированные слова с учетом контекста
///
/// Из совпадений всех трех видов выбирается самое длинное, при равной длине
/// побеждает вид верхнего уровня, затем слово переноса строки.
#[derive(Debug)]
pub struct ReservedMatcher {
    vocabulary: Arc<CompiledVocabulary>,
    policy: Arc<dyn KeywordPolicy>,
}

impl ReservedMatcher {
    pub fn new(vocabulary: Arc<CompiledVocabulary>, policy: Arc<dyn KeywordPolicy>) -> Self {
        Self { vocabulary, policy }
    }
}

impl Matcher for ReservedMatcher {
    fn name(&self) -> &'static str {
        "reserved"
    }

    fn try_match(&self, remaining: &str, previous: Option<&Token>) -> Option<Token> {
        let mut best: Option<(KeywordCategory, &str)> = None;
        for category in KeywordCategory::ALL {
            if let Some(text) = self.vocabulary.match_keyword(category, remaining) {
                if best.map_or(true, |(_, longest)| text.len() > longest.len()) {
                    best = Some((category, text));
                }
            }
        }

        let (category, text) = best?;
        let kind = self.policy.resolve(category, TokenContext::of(previous))?;
        Some(Token::new(kind, text))
    }
}

/// Имя известной функции перед `(`; сама скобка не поглощается
#[derive(Debug)]
pub struct FunctionMatcher {
    vocabulary: Arc<CompiledVocabulary>,
}

impl FunctionMatcher {
    pub fn new(vocabulary: Arc<CompiledVocabulary>) -> Self {
        Self { vocabulary }
    }
}

impl Matcher for FunctionMatcher {
    fn name(&self) -> &'static str {
        "function"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        self.vocabulary.match_function(remaining).map(Token::function)
    }
}

/// Обычное слово; если ничего не подошло, один символ как `Error`
///
/// Всегда продвигается хотя бы на один символ на непустом входе.
#[derive(Debug, Default)]
pub struct WordMatcher;

impl Matcher for WordMatcher {
    fn name(&self) -> &'static str {
        "word"
    }

    fn try_match(&self, remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        let end = prefix_len(remaining, |c| c.is_alphanumeric() || matches!(c, '_' | '$'));
        if end > 0 {
            return Some(Token::new(TokenKind::Word, &remaining[..end]));
        }

        let unknown = remaining.chars().next()?;
        log::trace!("Нераспознанный символ {:?}", unknown);
        Some(Token::new(TokenKind::Error, &remaining[..unknown.len_utf8()]))
    }
}

/// Длина в байтах максимального префикса из символов, удовлетворяющих условию
fn prefix_len(input: &str, accept: impl Fn(char) -> bool) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| !accept(c))
        .map(|(index, _)| index)
        .unwrap_or(input.len())
}

/// Длина строки в кавычках, начинающейся в начале входа
///
/// Удвоенная кавычка продолжает строку, `\` экранирует следующий символ
/// (кроме обратных кавычек). Незакрытая строка продолжается до конца входа.
fn quoted_len(input: &str) -> Option<usize> {
    let quote = input.chars().next()?;
    if !matches!(quote, '\'' | '"' | '`') {
        return None;
    }
    let escapes = quote != '`';

    let mut chars = input.char_indices().skip(1);
    while let Some((index, ch)) = chars.next() {
        if escapes && ch == '\\' {
            chars.next();
        } else if ch == quote {
            let end = index + quote.len_utf8();
            if input[end..].starts_with(quote) {
                chars.next();
                continue;
            }
            return Some(end);
        }
    }

    Some(input.len())
}
