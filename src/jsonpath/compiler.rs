//! Path expression compiler.

use super::classifier::compile_bracket;
use super::error::PathError;
use super::matcher::find_matching_close;
use super::token::AccessorToken;

/// Compiles a path expression into its accessor tokens.
///
/// The expression must start with `$` and continue with bracket segments,
/// each optionally preceded by `..` for a deep scan. `$` alone compiles to an
/// empty token list, which selects the root document.
pub fn compile(path: &str) -> Result<Vec<AccessorToken>, PathError> {
    let mut compiler = Compiler::new(path);
    let tokens = compiler.compile_path()?;
    log::trace!("compiled '{}' into {} token(s)", path, tokens.len());
    Ok(tokens)
}

/// Single-pass scanner over a path expression.
struct Compiler<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Compiler<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn compile_path(&mut self) -> Result<Vec<AccessorToken>, PathError> {
        match self.peek() {
            Some('$') => {
                self.position += 1;
            }
            Some(ch) => return Err(PathError::unexpected(0, ch, "'$' at start of path")),
            None => return Err(PathError::syntax("path is empty, expected '$'")),
        }

        let mut tokens = Vec::new();
        let mut deep_scan = false;

        while let Some(ch) = self.peek() {
            match ch {
                '.' if self.rest().starts_with("..") => {
                    self.position += 2;
                    deep_scan = true;
                    match self.peek() {
                        Some('[') => {}
                        Some(ch) => {
                            return Err(PathError::unexpected(self.position, ch, "'[' after '..'"))
                        }
                        None => return Err(PathError::end("'[' after '..'")),
                    }
                }
                '[' => {
                    let token = self.compile_segment()?;
                    tokens.push(if deep_scan {
                        token.to_deep_scan()
                    } else {
                        token
                    });
                    deep_scan = false;
                }
                _ => {
                    return Err(PathError::unexpected(self.position, ch, "'[' or '..'"));
                }
            }
        }

        Ok(tokens)
    }

    /// Compiles the bracket at the cursor and moves past its `]`.
    fn compile_segment(&mut self) -> Result<AccessorToken, PathError> {
        let open = self.position;
        let close = find_matching_close(self.input, open)?;
        let token = compile_bracket(self.input, open, close)?;
        self.position = close + 1;
        Ok(token)
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }
}
