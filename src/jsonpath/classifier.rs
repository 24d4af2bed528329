//! Classification of bracket contents into accessor tokens.

use super::error::PathError;
use super::token::AccessorToken;

/// Largest slice expanded into an explicit index list at compile time.
///
/// Wider slices compile to a range and are resolved against the array length
/// during evaluation.
pub const MAX_EXPANDED_SLICE: isize = 1024;

/// Compiles the content between `path[open_index]` and `path[close_index]`.
///
/// `close_index` is the position of the closing `]` as returned by
/// [`find_matching_close`](super::find_matching_close). The token kind is
/// chosen from the content alone: quoted keys first, then slices, then index
/// lists, then a single index.
pub fn compile_bracket(
    path: &str,
    open_index: usize,
    close_index: usize,
) -> Result<AccessorToken, PathError> {
    let content = path
        .get(open_index + 1..close_index)
        .ok_or_else(|| {
            PathError::syntax(format!(
                "no bracket content between positions {} and {}",
                open_index, close_index
            ))
        })?;

    if content.trim().is_empty() {
        return Err(PathError::syntax(format!(
            "empty brackets at position {}",
            open_index
        )));
    }

    if content.contains('\'') {
        let mut keys = parse_key_list(content)?;
        if keys.len() == 1 {
            return Ok(AccessorToken::ObjectAccessor(keys.remove(0)));
        }
        return Ok(AccessorToken::MultiObjectAccessor(keys));
    }

    if content.contains(':') {
        return parse_slice(content);
    }

    if content.contains(',') {
        let indices = content
            .split(',')
            .map(parse_index)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(AccessorToken::MultiArrayAccessor(indices));
    }

    parse_index(content).map(AccessorToken::ArrayAccessor)
}

/// Parses `-? digit+`, ignoring surrounding whitespace.
fn parse_index(text: &str) -> Result<isize, PathError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::syntax(format!("invalid index '{}'", trimmed)));
    }
    trimmed
        .parse::<isize>()
        .map_err(|_| PathError::syntax(format!("index out of range '{}'", trimmed)))
}

/// Parses `start:end` where either bound may be omitted.
///
/// Bounds that are both known and non-negative expand into an explicit index
/// list; everything else needs the array length and stays a range.
fn parse_slice(content: &str) -> Result<AccessorToken, PathError> {
    let mut parts = content.split(':');
    let (start, end) = match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) => (start.trim(), end.trim()),
        _ => {
            return Err(PathError::syntax(format!(
                "invalid slice '{}'",
                content.trim()
            )))
        }
    };

    let start = if start.is_empty() {
        0
    } else {
        parse_index(start)?
    };
    let end = if end.is_empty() {
        None
    } else {
        Some(parse_index(end)?)
    };

    match end {
        None => Ok(AccessorToken::ArrayLengthBasedRangeAccessor(start, None, 0)),
        Some(end) if end < 0 => Ok(AccessorToken::ArrayLengthBasedRangeAccessor(
            start, None, end,
        )),
        Some(end) if start < 0 => Ok(AccessorToken::ArrayLengthBasedRangeAccessor(
            start,
            Some(end),
            0,
        )),
        Some(end) if start >= end => Err(PathError::syntax(format!(
            "empty slice [{}:{}]",
            start, end
        ))),
        Some(end) if end - start > MAX_EXPANDED_SLICE => Ok(
            AccessorToken::ArrayLengthBasedRangeAccessor(start, Some(end), 0),
        ),
        Some(end) => Ok(AccessorToken::MultiArrayAccessor((start..end).collect())),
    }
}

/// Splits a key list on commas outside quotes and unquotes each element.
///
/// Unquoted elements must be integers and are kept verbatim as keys.
fn parse_key_list(content: &str) -> Result<Vec<String>, PathError> {
    let mut keys = Vec::new();
    let mut chars = content.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.peek() {
            Some('\'') => {
                chars.next();
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => key.push(escaped),
                            None => return Err(PathError::syntax("dangling escape character")),
                        },
                        Some(ch) => key.push(ch),
                        None => return Err(PathError::end("closing quote \"'\"")),
                    }
                }
                if key.is_empty() {
                    return Err(PathError::syntax("empty key in quotes"));
                }
                keys.push(key);
            }
            Some(_) => {
                let mut raw = String::new();
                while let Some(ch) = chars.next_if(|&c| c != ',' && c != '\'') {
                    raw.push(ch);
                }
                let trimmed = raw.trim();
                parse_index(trimmed)?;
                keys.push(trimmed.to_string());
            }
            None => return Err(PathError::end("key after ','")),
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        match chars.next() {
            Some(',') => continue,
            Some(ch) => {
                return Err(PathError::syntax(format!(
                    "unexpected '{}' after key, expected ',' or ']'",
                    ch
                )))
            }
            None => break,
        }
    }

    Ok(keys)
}
