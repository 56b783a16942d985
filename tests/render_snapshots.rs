//! Snapshot tests for the renderers and the debug report

use labelquery::{parse_query, QueryPipeline};
use labelquery::query::formats::{to_infix_string, to_json, to_treeviz_str};

const PROGRAM_QUERY: &str = "ingenieria y (sistemas o software) y no civil";

#[test]
fn test_infix_of_program_query() {
    let tree = parse_query(PROGRAM_QUERY).unwrap();
    insta::assert_snapshot!(
        to_infix_string(&tree),
        @"(('ingenieria' y ('sistemas' o 'software')) y no('civil'))"
    );
}

#[test]
fn test_treeviz_of_program_query() {
    let tree = parse_query(PROGRAM_QUERY).unwrap();
    insta::assert_snapshot!(to_treeviz_str(&tree), @r"
└─ AND
   ├─ AND
   │  ├─ TERM: 'ingenieria'
   │  └─ OR
   │     ├─ TERM: 'sistemas'
   │     └─ TERM: 'software'
   └─ NOT
      └─ TERM: 'civil'
");
}

#[test]
fn test_treeviz_of_quoted_terms() {
    let tree = parse_query("\"ciencia de datos\" o no no 'y'").unwrap();
    insta::assert_snapshot!(to_treeviz_str(&tree), @r"
└─ OR
   ├─ TERM: 'ciencia de datos'
   └─ NOT
      └─ NOT
         └─ TERM: 'y'
");
}

#[test]
fn test_json_of_negation() {
    let tree = parse_query("no civil").unwrap();
    insta::assert_snapshot!(to_json(&tree).unwrap(), @r#"
{
  "not": {
    "term": "civil"
  }
}
"#);
}

#[test]
fn test_explain_report() {
    let query = QueryPipeline::default()
        .compile("ingenieria y no civil")
        .unwrap();
    insta::assert_snapshot!(query.explain(&["Ingeniería", "de", "Sistemas"]), @r"
Expression: ('ingenieria' y no('civil'))

Tree:
└─ AND
   ├─ TERM: 'ingenieria'
   └─ NOT
      └─ TERM: 'civil'

Evaluation:
  TERM 'ingenieria' -> true  (match: ['Ingeniería'])
    TERM 'civil' -> false
  NOT -> true  (inner=false)
AND -> true  (left=true, right=true)

Result: true
");
}
