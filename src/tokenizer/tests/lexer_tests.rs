//! Тесты для токенизатора

use super::{lexemes, rebuild};
use crate::common::{CacheConfig, Error, TokenizerConfig};
use crate::tokenizer::matchers::WhitespaceMatcher;
use crate::tokenizer::{
    Classified, ClassifierPipeline, CompiledVocabulary, Matcher, Position, ScanPhase, ScanState,
    Token, TokenKind, Tokenizer, WordLists,
};
use std::sync::Arc;

const SAMPLES: &[&str] = &[
    "SELECT a, b FROM t WHERE a = 1",
    "SELECT   *\nFROM t",
    "select count(*) as n from users u left join orders o on o.user_id = u.id group by u.id",
    "INSERT INTO t (a, b) VALUES (1, 'x') ON DUPLICATE KEY UPDATE b = VALUES(b);",
    "UPDATE t SET a = a-1, b = -2.5e3 WHERE c <=> NULL AND d->>'$.x' = @v",
    "-- comment\n/* block */ SELECT `weird``name`, \"dq\\\"uote\" # tail",
    "SELECT 'unterminated",
    "/* unterminated block",
    "§§§ ¿qué? 名前 = :param",
    "",
    "   \t\n",
];

fn tokenizer() -> Tokenizer {
    Tokenizer::new().unwrap()
}

fn uncached() -> Tokenizer {
    Tokenizer::with_config(TokenizerConfig {
        cache: CacheConfig {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_empty_input() {
    let tokens = tokenizer().tokenize("").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_concatenation_reproduces_input() {
    let tokenizer = tokenizer();
    for sample in SAMPLES {
        let tokens = tokenizer.tokenize(sample).unwrap();
        assert_eq!(&rebuild(&tokens), sample);
        assert!(tokens.iter().all(|t| !t.text.is_empty()));
        assert!(tokens.len() <= sample.chars().count());
    }
}

#[test]
fn test_whitespace_preserved() {
    let tokens = tokenizer().tokenize("SELECT   *\nFROM t").unwrap();
    assert_eq!(
        lexemes(&tokens),
        vec![
            (TokenKind::ReservedTopLevel, "SELECT"),
            (TokenKind::Whitespace, "   "),
            (TokenKind::Boundary, "*"),
            (TokenKind::Whitespace, "\n"),
            (TokenKind::ReservedTopLevel, "FROM"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Word, "t"),
        ]
    );
}

#[test]
fn test_unknown_characters_become_errors() {
    let tokens = tokenizer().tokenize("§§§").unwrap();
    assert_eq!(
        lexemes(&tokens),
        vec![
            (TokenKind::Error, "§"),
            (TokenKind::Error, "§"),
            (TokenKind::Error, "§"),
        ]
    );
}

#[test]
fn test_longest_keyword_wins() {
    let lists = WordLists {
        reserved: vec!["GROUP".to_string(), "GROUP BY".to_string()],
        ..Default::default()
    };
    let tokenizer = Tokenizer::from_word_lists(&lists, TokenizerConfig::default()).unwrap();
    let tokens = tokenizer.tokenize("GROUP BY x").unwrap();

    assert_eq!(
        lexemes(&tokens),
        vec![
            (TokenKind::Reserved, "GROUP BY"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Word, "x"),
        ]
    );
}

#[test]
fn test_multiword_phrases_are_single_tokens() {
    let tokens = tokenizer()
        .tokenize("a LEFT OUTER JOIN b ON DUPLICATE KEY UPDATE c")
        .unwrap();
    let reserved: Vec<_> = lexemes(&tokens)
        .into_iter()
        .filter(|(kind, _)| kind.is_reserved())
        .collect();

    assert_eq!(
        reserved,
        vec![
            (TokenKind::ReservedNewline, "LEFT OUTER JOIN"),
            (TokenKind::ReservedTopLevel, "ON DUPLICATE KEY UPDATE"),
        ]
    );
}

#[test]
fn test_keyword_case_preserved() {
    let tokens = tokenizer().tokenize("select x fRoM y").unwrap();
    assert_eq!(tokens[0].text, "select");
    assert_eq!(tokens[0].kind, TokenKind::ReservedTopLevel);
    assert_eq!(tokens[4].text, "fRoM");
    assert_eq!(tokens[4].kind, TokenKind::ReservedTopLevel);
}

#[test]
fn test_function_call_flag() {
    let tokens = tokenizer().tokenize("SELECT COUNT(*), count (x) FROM t").unwrap();

    let call = &tokens[2];
    assert_eq!(call.text, "COUNT");
    assert_eq!(call.kind, TokenKind::Word);
    assert!(call.function_call);
    assert_eq!(tokens[3].text, "(");

    // С пробелом перед скобкой это обычное слово
    let plain = tokens.iter().find(|t| t.text == "count").unwrap();
    assert_eq!(plain.kind, TokenKind::Word);
    assert!(!plain.function_call);
}

#[test]
fn test_keyword_after_dot_is_word() {
    let tokens = tokenizer().tokenize("SELECT t.from FROM t").unwrap();
    assert_eq!(
        lexemes(&tokens),
        vec![
            (TokenKind::ReservedTopLevel, "SELECT"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Word, "t"),
            (TokenKind::Boundary, "."),
            (TokenKind::Word, "from"),
            (TokenKind::Whitespace, " "),
            (TokenKind::ReservedTopLevel, "FROM"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Word, "t"),
        ]
    );
}

const QUALIFIED_THEN_KEYWORD: &str = "SELECT a.from tbl where 1 = 1; from tbl where 1 = 1";

fn from_kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens
        .iter()
        .filter(|t| t.text.eq_ignore_ascii_case("from"))
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_context_rule_survives_cache() {
    let tokenizer = tokenizer();
    for _ in 0..3 {
        let tokens = tokenizer.tokenize(QUALIFIED_THEN_KEYWORD).unwrap();
        assert_eq!(
            from_kinds(&tokens),
            vec![TokenKind::Word, TokenKind::ReservedTopLevel]
        );
    }
}

#[test]
fn test_prefix_only_cache_reuses_context_result() {
    let tokenizer = Tokenizer::with_config(TokenizerConfig {
        cache: CacheConfig {
            context_aware: false,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    // Ключ без контекста: второе `from` берется из записи, сделанной после `.`
    let tokens = tokenizer.tokenize(QUALIFIED_THEN_KEYWORD).unwrap();
    assert_eq!(from_kinds(&tokens), vec![TokenKind::Word, TokenKind::Word]);
    assert_eq!(rebuild(&tokens), QUALIFIED_THEN_KEYWORD);
}

#[test]
fn test_cache_is_transparent() {
    let cached = tokenizer();
    let plain = uncached();

    for sample in SAMPLES {
        let expected = plain.tokenize(sample).unwrap();
        assert_eq!(cached.tokenize(sample).unwrap(), expected);
        assert_eq!(cached.tokenize(sample).unwrap(), expected);
    }

    let stats = cached.cache_stats();
    assert!(stats.hits > 0);
    assert!(stats.entries > 0);
    assert_eq!(plain.cache_stats().entries, 0);

    cached.clear_cache();
    assert_eq!(cached.cache_stats().entries, 0);
}

#[test]
fn test_token_positions() {
    let tokens = tokenizer().tokenize("SELECT\n  x, 'é' y").unwrap();

    assert_eq!(tokens[0].position, Position::new(1, 1, 0));
    assert_eq!(tokens[1].position, Position::new(1, 7, 6));
    assert_eq!(tokens[2].text, "x");
    assert_eq!(tokens[2].position, Position::new(2, 3, 9));

    let quote = tokens.iter().find(|t| t.kind == TokenKind::Quote).unwrap();
    assert_eq!(quote.position, Position::new(2, 6, 12));
    let last = tokens.last().unwrap();
    assert_eq!(last.text, "y");
    assert_eq!(last.position, Position::new(2, 10, 17));
}

#[test]
fn test_operators_and_signed_numbers() {
    let tokens = tokenizer().tokenize("SET @a = -1, @b = a-1").unwrap();
    assert_eq!(
        lexemes(&tokens),
        vec![
            (TokenKind::ReservedTopLevel, "SET"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Variable, "@a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Boundary, "="),
            (TokenKind::Whitespace, " "),
            (TokenKind::Number, "-1"),
            (TokenKind::Boundary, ","),
            (TokenKind::Whitespace, " "),
            (TokenKind::Variable, "@b"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Boundary, "="),
            (TokenKind::Whitespace, " "),
            (TokenKind::Word, "a"),
            (TokenKind::Boundary, "-"),
            (TokenKind::Number, "1"),
        ]
    );
}

#[test]
fn test_quotes_and_comments() {
    let input = "SELECT 'it''s', `c``d` -- done\n/* x */";
    let tokens = tokenizer().tokenize(input).unwrap();
    let kinds: Vec<TokenKind> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| t.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::ReservedTopLevel,
            TokenKind::Quote,
            TokenKind::Boundary,
            TokenKind::BacktickQuote,
            TokenKind::Comment,
            TokenKind::BlockComment,
        ]
    );
}

struct EmptyMatcher;

impl Matcher for EmptyMatcher {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn try_match(&self, _remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        Some(Token::new(TokenKind::Word, ""))
    }
}

struct ForeignMatcher;

impl Matcher for ForeignMatcher {
    fn name(&self) -> &'static str {
        "foreign"
    }

    fn try_match(&self, _remaining: &str, _previous: Option<&Token>) -> Option<Token> {
        Some(Token::new(TokenKind::Word, "zzz"))
    }
}

fn custom(matcher: Box<dyn Matcher>) -> Tokenizer {
    let vocabulary = Arc::new(CompiledVocabulary::build(&WordLists::default()).unwrap());
    Tokenizer::with_pipeline(
        vocabulary,
        ClassifierPipeline::new(vec![matcher]),
        TokenizerConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_empty_token_stalls() {
    let result = custom(Box::new(EmptyMatcher)).tokenize("abc");
    match result {
        Err(Error::Stalled { offset, matcher }) => {
            assert_eq!(offset, 0);
            assert_eq!(matcher, "empty");
        }
        other => panic!("expected stall, got {:?}", other),
    }
}

#[test]
fn test_non_prefix_token_rejected() {
    let result = custom(Box::new(ForeignMatcher)).tokenize("abc");
    assert!(matches!(result, Err(Error::ContractViolation { .. })));
    assert!(result.unwrap_err().is_engine_defect());
}

#[test]
fn test_unclaimed_input_rejected() {
    let result = custom(Box::new(WhitespaceMatcher)).tokenize(" abc");
    assert!(matches!(result, Err(Error::ContractViolation { .. })));
}

#[test]
fn test_empty_pipeline_rejected() {
    let vocabulary = Arc::new(CompiledVocabulary::build(&WordLists::default()).unwrap());
    let result = Tokenizer::with_pipeline(
        vocabulary,
        ClassifierPipeline::new(Vec::new()),
        TokenizerConfig::default(),
    );
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_scan_state_phases() {
    let mut state = ScanState::new("ab");
    assert_eq!(state.phase(), ScanPhase::Scanning);
    assert!(state.previous().is_none());

    state
        .emit(Classified {
            token: Token::new(TokenKind::Word, "a"),
            matcher: "test",
        })
        .unwrap();
    assert_eq!(state.phase(), ScanPhase::Scanning);
    assert_eq!(state.remaining(), "b");
    assert_eq!(state.previous().map(|t| t.text.as_str()), Some("a"));

    state
        .emit(Classified {
            token: Token::new(TokenKind::Word, "b"),
            matcher: "test",
        })
        .unwrap();
    assert_eq!(state.phase(), ScanPhase::Done);
    assert_eq!(state.remaining_len(), 0);

    let tokens = state.finish();
    assert_eq!(tokens[1].position, Position::new(1, 2, 1));
    assert_eq!(ScanState::new("").phase(), ScanPhase::Done);
}

#[test]
fn test_scan_state_stalled_phase() {
    let mut state = ScanState::new("ab");
    let result = state.emit(Classified {
        token: Token::new(TokenKind::Word, ""),
        matcher: "test",
    });

    assert!(result.is_err());
    assert_eq!(state.phase(), ScanPhase::Stalled);
}

#[test]
fn test_batch_matches_sequential() {
    let tokenizer = tokenizer();
    let results = tokenizer.tokenize_batch(SAMPLES);

    assert_eq!(results.len(), SAMPLES.len());
    for (sample, result) in SAMPLES.iter().zip(results) {
        assert_eq!(result.unwrap(), tokenizer.tokenize(sample).unwrap());
    }
}

#[test]
fn test_shared_between_threads() {
    let tokenizer = tokenizer();
    let reference = uncached();
    let expected: Vec<Vec<Token>> = SAMPLES
        .iter()
        .map(|sample| reference.tokenize(sample).unwrap())
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (sample, expected) in SAMPLES.iter().zip(&expected) {
                    assert_eq!(&tokenizer.tokenize(sample).unwrap(), expected);
                }
            });
        }
    });
}

#[test]
fn test_custom_vocabulary_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dialect.toml");
    std::fs::write(
        &path,
        "reserved_toplevel = [\"FETCH\"]\nboundaries = [\";\"]\n",
    )
    .unwrap();

    let tokenizer = Tokenizer::with_config(TokenizerConfig {
        vocabulary_file: Some(path),
        ..Default::default()
    })
    .unwrap();
    let tokens = tokenizer.tokenize("fetch SELECT;").unwrap();

    assert_eq!(
        lexemes(&tokens),
        vec![
            (TokenKind::ReservedTopLevel, "fetch"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Word, "SELECT"),
            (TokenKind::Boundary, ";"),
        ]
    );
}
