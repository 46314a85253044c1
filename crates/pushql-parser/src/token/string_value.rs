use crate::StringParsingError;

/// Parse a raw string literal (quotes included) into its unescaped content.
pub(crate) fn cook_string_literal(raw: &str) -> Result<String, StringParsingError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(StringParsingError::UnterminatedString);
    }
    let content = &raw[1..raw.len() - 1];

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(cook_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(StringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            }
            None => {
                return Err(StringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            }
        }
    }

    Ok(result)
}

/// Parse a Unicode escape sequence after seeing `\u`. Accepts both the
/// fixed `\uXXXX` form and the braced `\u{X...}` form.
fn cook_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars>,
) -> Result<char, StringParsingError> {
    let mut hex = String::new();
    let braced = chars.peek() == Some(&'{');

    if braced {
        chars.next();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) if c.is_ascii_hexdigit() && hex.len() < 6 => hex.push(c),
                Some(c) => {
                    return Err(StringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}{c}"
                    )));
                }
                None => {
                    return Err(StringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{{{hex}"
                    )));
                }
            }
        }
        if hex.is_empty() {
            return Err(StringParsingError::InvalidUnicodeEscape(
                "\\u{}".to_string(),
            ));
        }
    } else {
        for _ in 0..4 {
            match chars.next() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => {
                    return Err(StringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{hex}{c}"
                    )));
                }
                None => {
                    return Err(StringParsingError::InvalidUnicodeEscape(format!(
                        "\\u{hex}"
                    )));
                }
            }
        }
    }

    let display = if braced {
        format!("\\u{{{hex}}}")
    } else {
        format!("\\u{hex}")
    };
    let code_point = u32::from_str_radix(&hex, 16)
        .map_err(|_| StringParsingError::InvalidUnicodeEscape(display.clone()))?;
    char::from_u32(code_point).ok_or(StringParsingError::InvalidUnicodeEscape(display))
}
