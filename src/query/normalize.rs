//! Text normalization for matching
//!
//! Only the evaluator normalizes; the tokenizer and parser see the query as
//! written. Accents are stripped before folding so that characters whose
//! folded form carries a combining mark (e.g. `İ`) come out bare.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonically decompose and drop every combining mark.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Full Unicode case folding (`ß` folds to `ss`, not to itself).
pub fn fold_case(text: &str) -> String {
    caseless::default_case_fold_str(text)
}

pub fn normalize(text: &str, fold: bool, strip: bool) -> String {
    let text = if strip {
        strip_accents(text)
    } else {
        text.to_string()
    };
    if fold {
        fold_case(&text)
    } else {
        text
    }
}
