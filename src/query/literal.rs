//! Literal values
//!
//! Quoted literals keep their quotes through lexing and parsing; the value a
//! `Term` matches against is decoded here, once, during tree construction.
//! [`quote`] is the inverse used by the infix renderer.

/// Strip matching surrounding quotes and decode backslash escapes.
///
/// Text that is not wrapped in a matching pair of `"` or `'` is returned
/// unchanged, so bare words pass straight through.
pub fn unquote(token: &str) -> String {
    match strip_quotes(token) {
        Some(inner) => decode_escapes(inner),
        None => token.to_string(),
    }
}

fn strip_quotes(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if token.len() < 2 || (first != '"' && first != '\'') || !token.ends_with(first) {
        return None;
    }
    Some(&token[1..token.len() - 1])
}

/// Decode `\n \t \r \a \b \f \v \\ \" \'`, octal `\o` to `\ooo`,
/// `\xHH`, `\uHHHH` and `\UHHHHHHHH`. A backslash before a newline joins
/// the lines.
///
/// Unknown or truncated escapes are kept literally, backslash included.
/// Named escapes (`\N{...}`) are not decoded.
pub fn decode_escapes(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };
        match escape {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '0'..='7' => {
                let mut code = escape.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // At most 0o777, always a valid scalar value
                out.extend(char::from_u32(code));
            }
            '\n' => {}
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            '\\' | '"' | '\'' => out.push(escape),
            'x' | 'u' | 'U' => {
                let width = match escape {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let well_formed =
                    digits.len() == width && digits.chars().all(|d| d.is_ascii_hexdigit());
                let decoded = well_formed
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        out.push('\\');
                        out.push(escape);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

/// Render a value as a single-quoted literal that [`unquote`] decodes back
/// to the same value.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
