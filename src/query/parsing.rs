//! Shunting-yard conversion from infix tokens to postfix order
//!
//! Operator pops follow the precedence table in
//! [`crate::query::operators`]. The binary operators are left-associative
//! and pop anything of greater or equal precedence; `no` is a right-
//! associative prefix operator and only pops strictly stronger operators, so
//! `no no a` stays two nested negations and `no a y b` binds as
//! `(no a) y b`.

use crate::query::error::QueryError;
use crate::query::lexing::Token;
use crate::query::operators::Operator;

fn should_pop(top: Operator, incoming: Operator) -> bool {
    if incoming.is_right_associative() {
        top.precedence() > incoming.precedence()
    } else {
        top.precedence() >= incoming.precedence()
    }
}

/// Reorder an infix token stream into postfix (RPN) order.
///
/// Parentheses never appear in the output. A `)` without a matching `(` on
/// the stack, or a `(` still on the stack at end of input, fails with
/// [`QueryError::UnbalancedParentheses`].
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, QueryError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::OpenParen => stack.push(Token::OpenParen),
            Token::CloseParen => loop {
                match stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(QueryError::UnbalancedParentheses),
                }
            },
            Token::Operator(incoming) => {
                while let Some(top) = stack.last().and_then(Token::operator) {
                    if !should_pop(top, *incoming) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(Token::Operator(*incoming));
            }
            Token::Literal(_) => output.push(token.clone()),
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_paren() {
            return Err(QueryError::UnbalancedParentheses);
        }
        output.push(top);
    }

    log::debug!(
        "postfix: {}",
        output
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::lexing::tokenize;

    fn postfix(query: &str) -> Result<String, QueryError> {
        let tokens = tokenize(query)?;
        Ok(to_postfix(&tokens)?
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "))
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(postfix("a o b y c").unwrap(), "a b c y o");
        assert_eq!(postfix("a y b o c").unwrap(), "a b y c o");
    }

    #[test]
    fn test_binaries_are_left_associative() {
        assert_eq!(postfix("a y b y c").unwrap(), "a b y c y");
        assert_eq!(postfix("a o b o c").unwrap(), "a b o c o");
    }

    #[test]
    fn test_not_chains_right_to_left() {
        assert_eq!(postfix("no no a").unwrap(), "a no no");
    }

    #[test]
    fn test_not_binds_tightest() {
        assert_eq!(postfix("no a y b").unwrap(), "a no b y");
        assert_eq!(postfix("a y no b").unwrap(), "a b no y");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("(a o b) y c").unwrap(), "a b o c y");
        assert_eq!(postfix("no (a o b)").unwrap(), "a b o no");
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(postfix("(a y b"), Err(QueryError::UnbalancedParentheses));
        assert_eq!(postfix("a y b)"), Err(QueryError::UnbalancedParentheses));
        assert_eq!(postfix(")("), Err(QueryError::UnbalancedParentheses));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(postfix("").unwrap(), "");
        assert_eq!(postfix("()").unwrap(), "");
    }
}
