//! Behavioral tests for the composed query API
//!
//! Each case table covers one property of the language: tokenization,
//! precedence, grouping of negations, quoting, matching modes and the three
//! validation errors.

use labelquery::query::lexing::tokenize;
use labelquery::query::operators::Operator;
use labelquery::{evaluate_query, parse_query, MatchOptions, Node, QueryError};
use rstest::rstest;

fn opts(substring: bool, strip_accents: bool) -> MatchOptions {
    MatchOptions {
        substring,
        strip_accents,
    }
}

fn token_strings(query: &str) -> Vec<String> {
    tokenize(query)
        .expect("query to tokenize")
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[rstest]
#[case("(a y b)", &["(", "a", "y", "b", ")"])]
#[case("ingenieria Y (sistemas O software) y NO civil", &["ingenieria", "y", "(", "sistemas", "o", "software", ")", "y", "no", "civil"])]
#[case("\"hola mundo\"", &["\"hola mundo\""])]
#[case("'no' y \"o\"", &["'no'", "y", "\"o\""])]
#[case("  noche   yate  ", &["noche", "yate"])]
#[case("no-presencial", &["no", "-presencial"])]
#[case("ingenieria y/o sistemas", &["ingenieria", "y", "/o", "sistemas"])]
#[case("nombre yoga ojo no_x", &["nombre", "yoga", "ojo", "no_x"])]
fn test_tokenize(#[case] query: &str, #[case] expected: &[&str]) {
    assert_eq!(token_strings(query), expected);
}

#[rstest]
#[case(&["Ingeniería", "de", "Sistemas"], "ingenieria y sistemas", true)]
#[case(&["Ingeniería", "Civil"], "ingenieria y no civil", false)]
#[case(&["Ingeniería", "de", "Software"], "ingenieria y (sistemas o software) y no civil", true)]
#[case(&["Ingeniería", "Civil", "y", "Ambiental"], "ingenieria y (sistemas o software) y no civil", false)]
#[case(&["Administración", "de", "Empresas"], "ingenieria o administracion", true)]
#[case(&["Licenciatura", "en", "Música"], "no (ingenieria o administracion)", true)]
#[case(&["virtual"], "no-presencial", true)]
#[case(&["Educación", "-presencial"], "no-presencial", false)]
fn test_evaluate_query(#[case] corpus: &[&str], #[case] query: &str, #[case] expected: bool) {
    assert_eq!(
        evaluate_query(corpus, query, MatchOptions::default()),
        Ok(expected)
    );
}

#[rstest]
#[case("a o b y c", "a o (b y c)")]
#[case("a y b o c", "(a y b) o c")]
#[case("no a y b", "(no a) y b")]
#[case("a y b y c", "(a y b) y c")]
#[case("a o b o c", "(a o b) o c")]
#[case("no a o no b y c", "(no a) o ((no b) y c)")]
fn test_precedence_matches_explicit_grouping(#[case] implicit: &str, #[case] explicit: &str) {
    assert_eq!(parse_query(implicit), parse_query(explicit));
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        parse_query("a o b y c").unwrap(),
        Node::or(Node::term("a"), Node::and(Node::term("b"), Node::term("c")))
    );
}

#[test]
fn test_chained_negation_is_nested() {
    assert_eq!(
        parse_query("no no a").unwrap(),
        Node::not(Node::not(Node::term("a")))
    );
    assert_eq!(
        parse_query("no no no a").unwrap(),
        Node::not(Node::not(Node::not(Node::term("a"))))
    );
}

#[rstest]
#[case("\"hola mundo\"", "hola mundo")]
#[case("'hola mundo'", "hola mundo")]
#[case(r#""dijo \"si\"""#, "dijo \"si\"")]
#[case("'y'", "y")]
fn test_quoted_literal_is_one_term(#[case] query: &str, #[case] value: &str) {
    assert_eq!(parse_query(query).unwrap(), Node::term(value));
}

#[rstest]
#[case("ingenieria", "Ingeniería", opts(true, true), true)]
#[case("ingenieria", "Ingeniería", opts(true, false), false)]
#[case("INGENIERÍA", "ingeniería", opts(false, false), true)]
#[case("ingenier", "ingenieria", opts(true, true), true)]
#[case("ingenier", "ingenieria", opts(false, true), false)]
#[case("ingenieria", "ingenieria", opts(false, true), true)]
#[case("strasse", "Straße", opts(false, true), true)]
fn test_matching_modes(
    #[case] term: &str,
    #[case] word: &str,
    #[case] options: MatchOptions,
    #[case] expected: bool,
) {
    assert_eq!(evaluate_query(&[word], term, options), Ok(expected));
}

#[rstest]
#[case("(a y b")]
#[case("a y b)")]
#[case("((a)")]
#[case(")a(")]
fn test_unbalanced_parentheses(#[case] query: &str) {
    assert_eq!(
        evaluate_query(&["a", "b"], query, MatchOptions::default()),
        Err(QueryError::UnbalancedParentheses)
    );
}

#[rstest]
#[case("a y", Operator::And)]
#[case("y a", Operator::And)]
#[case("o", Operator::Or)]
#[case("no", Operator::Not)]
#[case("(a o) y b", Operator::Or)]
fn test_missing_operand(#[case] query: &str, #[case] operator: Operator) {
    assert_eq!(
        evaluate_query(&["a"], query, MatchOptions::default()),
        Err(QueryError::MissingOperand { operator })
    );
}

#[rstest]
#[case("", 0)]
#[case("   ", 0)]
#[case("()", 0)]
#[case("a b", 2)]
#[case("(a y b) c d", 3)]
fn test_malformed_expression(#[case] query: &str, #[case] operands: usize) {
    assert_eq!(
        evaluate_query(&["a"], query, MatchOptions::default()),
        Err(QueryError::MalformedExpression { operands })
    );
}

#[rstest]
#[case("\"abc", 0)]
#[case("a y 'b", 4)]
#[case("a\"b", 1)]
fn test_unterminated_quote_is_rejected(#[case] query: &str, #[case] offset: usize) {
    assert_eq!(
        parse_query(query),
        Err(QueryError::UnterminatedQuote { offset })
    );
}
