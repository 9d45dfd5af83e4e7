//! Словарь токенизатора
//!
//! Компилирует списки слов диалекта (зарезервированные слова, функции,
//! разделители, ключевые слова верхнего уровня и переноса строки) в
//! регулярные выражения. Результат компиляции неизменяем
//! и принадлежит конкретному экземпляру токенизатора.

use crate::common::{Error, Result};
use crate::tokenizer::dialect;
use indexmap::IndexSet;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::path::Path;

/// Исходные списки слов диалекта
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordLists {
    pub reserved: Vec<String>,
    pub functions: Vec<String>,
    pub boundaries: Vec<String>,
    pub reserved_toplevel: Vec<String>,
    pub reserved_newline: Vec<String>,
}

impl WordLists {
    /// Стандартный словарь (MySQL-подобный диалект)
    pub fn standard() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            reserved: owned(dialect::RESERVED),
            functions: owned(dialect::FUNCTIONS),
            boundaries: owned(dialect::BOUNDARIES),
            reserved_toplevel: owned(dialect::RESERVED_TOPLEVEL),
            reserved_newline: owned(dialect::RESERVED_NEWLINE),
        }
    }

    /// Загружает словарь диалекта из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::vocabulary(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

/// Категория слов словаря
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Reserved,
    Function,
    Boundary,
    ReservedTopLevel,
    ReservedNewline,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Reserved,
        Category::Function,
        Category::Boundary,
        Category::ReservedTopLevel,
        Category::ReservedNewline,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Reserved => "reserved",
            Category::Function => "function",
            Category::Boundary => "boundary",
            Category::ReservedTopLevel => "reserved_toplevel",
            Category::ReservedNewline => "reserved_newline",
        };
        write!(f, "{}", name)
    }
}

/// Вид ключевого слова, найденного классификатором зарезервированных слов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    TopLevel,
    Newline,
    Plain,
}

impl KeywordCategory {
    /// Порядок проверки; при равной длине совпадения выигрывает более ранний
    pub const ALL: [KeywordCategory; 3] = [
        KeywordCategory::TopLevel,
        KeywordCategory::Newline,
        KeywordCategory::Plain,
    ];
}

/// Скомпилированный словарь
#[derive(Debug, Clone)]
pub struct CompiledVocabulary {
    reserved: Vec<String>,
    functions: Vec<String>,
    boundaries: Vec<String>,
    reserved_toplevel: Vec<String>,
    reserved_newline: Vec<String>,
    boundary_pattern: Option<Regex>,
    reserved_pattern: Option<Regex>,
    toplevel_pattern: Option<Regex>,
    newline_pattern: Option<Regex>,
    function_pattern: Option<Regex>,
    terminator: String,
}

impl CompiledVocabulary {
    /// Компилирует списки слов
    pub fn build(lists: &WordLists) -> Result<Self> {
        let reserved = prepare(Category::Reserved, &lists.reserved)?;
        let functions = prepare(Category::Function, &lists.functions)?;
        let boundaries = prepare(Category::Boundary, &lists.boundaries)?;
        let reserved_toplevel = prepare(Category::ReservedTopLevel, &lists.reserved_toplevel)?;
        let reserved_newline = prepare(Category::ReservedNewline, &lists.reserved_newline)?;

        let boundary_alternation = alternation(&boundaries, false);
        let terminator = if boundary_alternation.is_empty() {
            r#"(?:\z|\s|["'`])"#.to_string()
        } else {
            format!(r#"(?:\z|\s|["'`]|{})"#, boundary_alternation)
        };

        let boundary_pattern = compile(&boundaries, |alt| format!("^(?:{})", alt), false, false)?;
        let reserved_pattern = compile(
            &reserved,
            |alt| format!("^({}){}", alt, terminator),
            false,
            true,
        )?;
        let toplevel_pattern = compile(
            &reserved_toplevel,
            |alt| format!("^({}){}", alt, terminator),
            true,
            true,
        )?;
        let newline_pattern = compile(
            &reserved_newline,
            |alt| format!("^({}){}", alt, terminator),
            true,
            true,
        )?;
        let function_pattern = compile(&functions, |alt| format!(r"^({})\(", alt), false, true)?;

        log::debug!(
            "Словарь скомпилирован: {} зарезервированных слов, {} функций, {} разделителей",
            reserved.len(),
            functions.len(),
            boundaries.len()
        );

        Ok(Self {
            reserved,
            functions,
            boundaries,
            reserved_toplevel,
            reserved_newline,
            boundary_pattern,
            reserved_pattern,
            toplevel_pattern,
            newline_pattern,
            function_pattern,
            terminator,
        })
    }

    /// Компилирует стандартный словарь
    pub fn standard() -> Result<Self> {
        Self::build(&WordLists::standard())
    }

    /// Самый длинный разделитель в начале входа
    pub fn match_boundary<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.boundary_pattern
            .as_ref()?
            .find(input)
            .map(|m| &input[..m.end()])
    }

    /// Ключевое слово указанного вида в начале входа (в исходном регистре)
    pub fn match_keyword<'a>(&self, category: KeywordCategory, input: &'a str) -> Option<&'a str> {
        let pattern = match category {
            KeywordCategory::TopLevel => &self.toplevel_pattern,
            KeywordCategory::Newline => &self.newline_pattern,
            KeywordCategory::Plain => &self.reserved_pattern,
        };
        capture_prefix(pattern.as_ref()?, input)
    }

    /// Имя известной функции, за которым сразу следует `(`
    pub fn match_function<'a>(&self, input: &'a str) -> Option<&'a str> {
        capture_prefix(self.function_pattern.as_ref()?, input)
    }

    /// Шаблон допустимого окончания слова: конец входа, пробел, кавычка или разделитель
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    /// Зарезервированные слова в порядке убывания длины
    pub fn reserved(&self) -> &[String] {
        &self.reserved
    }

    pub fn functions(&self) -> &[String] {
        &self.functions
    }

    pub fn boundaries(&self) -> &[String] {
        &self.boundaries
    }

    pub fn reserved_toplevel(&self) -> &[String] {
        &self.reserved_toplevel
    }

    pub fn reserved_newline(&self) -> &[String] {
        &self.reserved_newline
    }

    /// Исходный текст скомпилированного шаблона категории
    pub fn pattern_source(&self, category: Category) -> Option<&str> {
        let pattern = match category {
            Category::Reserved => &self.reserved_pattern,
            Category::Function => &self.function_pattern,
            Category::Boundary => &self.boundary_pattern,
            Category::ReservedTopLevel => &self.toplevel_pattern,
            Category::ReservedNewline => &self.newline_pattern,
        };
        pattern.as_ref().map(|p| p.as_str())
    }
}

/// Удаляет дубликаты и сортирует по убыванию длины (сортировка устойчива)
fn prepare(category: Category, words: &[String]) -> Result<Vec<String>> {
    let mut unique = IndexSet::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(Error::vocabulary(format!(
                "entry #{} of the {} list is empty",
                index, category
            )));
        }
        unique.insert(trimmed.to_string());
    }

    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_by_key(|word| Reverse(word.chars().count()));
    Ok(sorted)
}

/// Альтернатива из экранированных слов; во фразах пробелы совпадают с `\s+`
fn alternation(words: &[String], phrases: bool) -> String {
    words
        .iter()
        .map(|word| {
            if phrases {
                word.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            } else {
                regex::escape(word)
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(
    words: &[String],
    template: impl FnOnce(&str) -> String,
    phrases: bool,
    case_insensitive: bool,
) -> Result<Option<Regex>> {
    if words.is_empty() {
        return Ok(None);
    }

    let source = template(&alternation(words, phrases));
    let regex = RegexBuilder::new(&source)
        .case_insensitive(case_insensitive)
        .build()?;
    Ok(Some(regex))
}

fn capture_prefix<'a>(pattern: &Regex, input: &'a str) -> Option<&'a str> {
    let keyword = pattern.captures(input)?.get(1)?;
    Some(&input[..keyword.end()])
}
