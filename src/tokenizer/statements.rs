//! Разбиение потока токенов на отдельные SQL выражения

use crate::tokenizer::token::{Token, TokenKind};

/// Разбивает поток токенов по разделителю `;`
///
/// Точка с запятой остается в конце своего выражения, пробелы по краям
/// обрезаются, выражения без значимых токенов (только пробелы, комментарии
/// и `;`) отбрасываются.
pub fn split_statements(tokens: &[Token]) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut meaningful = false;

    for token in tokens {
        current.push_str(&token.text);

        if is_separator(token) {
            flush(&mut statements, &mut current, meaningful);
            meaningful = false;
        } else if !token.kind.should_skip() {
            meaningful = true;
        }
    }
    flush(&mut statements, &mut current, meaningful);

    statements
}

fn is_separator(token: &Token) -> bool {
    token.kind == TokenKind::Boundary && token.text == ";"
}

fn flush(statements: &mut Vec<String>, current: &mut String, meaningful: bool) {
    if meaningful {
        statements.push(current.trim().to_string());
    }
    current.clear();
}
