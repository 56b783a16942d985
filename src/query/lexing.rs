//! Tokenizer for the query language
//!
//! Scanning is done by a logos lexer over four shapes: parentheses, a
//! double- or single-quoted span (backslash escapes allowed inside), and a
//! bare word (any run without whitespace, parentheses or quotes). Whitespace
//! between tokens is skipped.
//!
//! A keyword (`no`, `y`, `o`, in any case) is recognised at the start of a
//! bare word when it is followed by the end of the word or by a non-word
//! character. Word characters are letters, digits and `_`. So `no-presencial`
//! lexes as `no` + `-presencial` and `y/o` as `y` + `/o`, while `nombre` and
//! `no_x` stay literals. Everything else keeps its original text, quotes
//! included. Decoding the literal value is left to
//! [`crate::query::literal::unquote`].
//!
//! A quote that does not open a terminated span is rejected with
//! [`QueryError::UnterminatedQuote`] instead of being read as a word
//! character.

use crate::query::error::QueryError;
use crate::query::operators::Operator;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Raw shapes recognised by the scanner
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
enum RawToken {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    #[regex(r#"[^\s()'"]+"#)]
    Word,
}

/// One lexical unit of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenParen,
    CloseParen,
    Operator(Operator),
    /// Literal text as written (quoted literals keep their quotes)
    Literal(String),
}

impl Token {
    pub fn is_paren(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::Operator(op) => f.write_str(op.keyword()),
            Token::Literal(text) => f.write_str(text),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a leading keyword off a bare word, returning the operator and the
/// remaining text (possibly empty).
fn split_keyword(word: &str) -> Option<(Operator, &str)> {
    Operator::ALL.into_iter().find_map(|candidate| {
        let len = candidate.keyword().len();
        let op = Operator::from_keyword(word.get(..len)?)?;
        let rest = &word[len..];
        match rest.chars().next() {
            Some(c) if is_word_char(c) => None,
            _ => Some((op, rest)),
        }
    })
}

/// Tokenize a query, keeping the byte span of every token
pub fn tokenize_with_spans(query: &str) -> Result<Vec<(Token, Range<usize>)>, QueryError> {
    let mut lexer = RawToken::lexer(query);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        match result {
            Ok(RawToken::OpenParen) => tokens.push((Token::OpenParen, span)),
            Ok(RawToken::CloseParen) => tokens.push((Token::CloseParen, span)),
            Ok(RawToken::DoubleQuoted | RawToken::SingleQuoted) => {
                tokens.push((Token::Literal(slice.to_string()), span))
            }
            Ok(RawToken::Word) => match split_keyword(slice) {
                Some((op, rest)) => {
                    let split = span.end - rest.len();
                    tokens.push((Token::Operator(op), span.start..split));
                    if !rest.is_empty() {
                        tokens.push((Token::Literal(rest.to_string()), split..span.end));
                    }
                }
                None => tokens.push((Token::Literal(slice.to_string()), span)),
            },
            // Only a quote character can fail to start one of the patterns
            Err(()) => return Err(QueryError::UnterminatedQuote { offset: span.start }),
        }
    }

    Ok(tokens)
}

/// Tokenize a query into its ordered token sequence
pub fn tokenize(query: &str) -> Result<Vec<Token>, QueryError> {
    let tokens: Vec<Token> = tokenize_with_spans(query)?
        .into_iter()
        .map(|(token, _)| token)
        .collect();
    log::debug!("tokenized {:?} into {} tokens", query, tokens.len());
    Ok(tokens)
}
