//! Bracket matching that skips over quoted keys.

use super::error::PathError;

/// Finds the `]` closing the bracket opened at `open_index`.
///
/// Returns the byte position of the closing bracket. Brackets inside `'...'`
/// are ignored, and inside quotes a `\` escapes the following character.
/// Brackets do not nest: the first unquoted `]` ends the match.
pub fn find_matching_close(path: &str, open_index: usize) -> Result<usize, PathError> {
    match path.as_bytes().get(open_index) {
        Some(b'[') => {}
        Some(&byte) => {
            return Err(match path.get(open_index..).and_then(|rest| rest.chars().next()) {
                Some(found) => PathError::unexpected(open_index, found, "'['"),
                None => PathError::syntax(format!(
                    "expected '[' at position {}, found byte 0x{:02x} inside a character",
                    open_index, byte
                )),
            });
        }
        None => return Err(PathError::end("'['")),
    }

    let mut in_quotes = false;
    let mut chars = path[open_index + 1..].char_indices();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '\\' if in_quotes => {
                if chars.next().is_none() {
                    return Err(PathError::syntax(format!(
                        "dangling escape character at position {}",
                        open_index + 1 + offset
                    )));
                }
            }
            '\'' => in_quotes = !in_quotes,
            ']' if !in_quotes => return Ok(open_index + 1 + offset),
            _ => {}
        }
    }

    if in_quotes {
        Err(PathError::end("closing quote \"'\""))
    } else {
        Err(PathError::end(format!(
            "']' to close bracket at position {}",
            open_index
        )))
    }
}
