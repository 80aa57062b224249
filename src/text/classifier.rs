//! Splitting of non-letter runs into typed tokens.

use crate::types::{Token, TokenKind};

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_dash(ch: char) -> bool {
    ch == '-' || ch == '_'
}

/// Length in bytes of the leading run of characters matching `pred`.
fn leading_run(text: &str, pred: fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, ch)| !pred(ch))
        .map_or(text.len(), |(index, _)| index)
}

/// Split a run of non-letter characters into `Number`, `Dash` and
/// `Symbol` tokens, left to right.
///
/// A symbol token extends up to the next digit or dash. Returns an empty
/// vector only for an empty run.
pub fn classify_non_letter_run(level: usize, run: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = run;

    while !rest.is_empty() {
        let digits = leading_run(rest, is_digit);
        let (len, kind) = if digits > 0 {
            (digits, TokenKind::Number)
        } else {
            let dashes = leading_run(rest, is_dash);
            if dashes > 0 {
                (dashes, TokenKind::Dash)
            } else {
                let symbols = leading_run(rest, |ch| !is_digit(ch) && !is_dash(ch));
                (symbols, TokenKind::Symbol)
            }
        };

        tokens.push(Token::run(&rest[..len], level, kind));
        rest = &rest[len..];
    }

    tokens
}
