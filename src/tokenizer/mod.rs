//! Токенизатор SQL для sqlscan

pub mod cache;
pub mod context;
pub mod dialect;
pub mod lexer;
pub mod matchers;
pub mod pipeline;
pub mod statements;
pub mod token;
pub mod vocabulary;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use cache::{CacheStats, LookaheadCache};
pub use context::{KeywordPolicy, StandardKeywordPolicy, TokenContext};
pub use lexer::{ScanPhase, ScanState, Tokenizer};
pub use matchers::Matcher;
pub use pipeline::{Classified, ClassifierPipeline};
pub use statements::split_statements;
pub use token::{Position, Token, TokenKind};
pub use vocabulary::{Category, CompiledVocabulary, KeywordCategory, WordLists};
