//! Accessor tokens produced by the path compiler.

use std::fmt;

/// One compiled instruction describing how to select children of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessorToken {
    /// Single array index ([0], [-1])
    ArrayAccessor(isize),
    /// Several array indices, in source order ([0,2,-1] or an expanded [1:4])
    MultiArrayAccessor(Vec<isize>),
    /// Slice that needs the array length to resolve ([3:], [:-1], [-5:4])
    ///
    /// Fields are `(start, end, offset_from_end)`. When `end` is absent the
    /// slice stops at `len + offset_from_end`.
    ArrayLengthBasedRangeAccessor(isize, Option<isize>, isize),
    /// Single object key (['name'])
    ObjectAccessor(String),
    /// Several object keys (['name','age'])
    MultiObjectAccessor(Vec<String>),
    /// Recursive descent followed by index selection (..[0], ..[0,1], ..[0:3])
    DeepScanArrayAccessor(Vec<isize>),
    /// Recursive descent followed by a length-based slice (..[1:])
    DeepScanLengthBasedArrayAccessor(isize, Option<isize>, isize),
    /// Recursive descent followed by key selection (..['name'])
    DeepScanObjectAccessor(Vec<String>),
}

impl AccessorToken {
    /// Converts a token into the variant applied at every depth of the tree.
    ///
    /// Deep-scan tokens are returned unchanged.
    pub fn to_deep_scan(self) -> Self {
        use AccessorToken::*;
        match self {
            ArrayAccessor(index) => DeepScanArrayAccessor(vec![index]),
            MultiArrayAccessor(indices) => DeepScanArrayAccessor(indices),
            ArrayLengthBasedRangeAccessor(start, end, offset) => {
                DeepScanLengthBasedArrayAccessor(start, end, offset)
            }
            ObjectAccessor(key) => DeepScanObjectAccessor(vec![key]),
            MultiObjectAccessor(keys) => DeepScanObjectAccessor(keys),
            deep @ (DeepScanArrayAccessor(_)
            | DeepScanLengthBasedArrayAccessor(..)
            | DeepScanObjectAccessor(_)) => deep,
        }
    }

    /// Returns true for the recursive-descent variants.
    pub fn is_deep_scan(&self) -> bool {
        matches!(
            self,
            AccessorToken::DeepScanArrayAccessor(_)
                | AccessorToken::DeepScanLengthBasedArrayAccessor(..)
                | AccessorToken::DeepScanObjectAccessor(_)
        )
    }
}

fn write_indices(f: &mut fmt::Formatter<'_>, indices: &[isize]) -> fmt::Result {
    for (i, index) in indices.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", index)?;
    }
    Ok(())
}

fn write_keys(f: &mut fmt::Formatter<'_>, keys: &[String]) -> fmt::Result {
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "'{}'", key.replace('\\', "\\\\").replace('\'', "\\'"))?;
    }
    Ok(())
}

fn write_range(
    f: &mut fmt::Formatter<'_>,
    start: isize,
    end: Option<isize>,
    offset: isize,
) -> fmt::Result {
    match (end, offset) {
        (Some(end), _) => write!(f, "[{}:{}]", start, end),
        (None, 0) => write!(f, "[{}:]", start),
        (None, offset) => write!(f, "[{}:{}]", start, offset),
    }
}

/// Renders the token back into bracket notation.
///
/// Expanded slices render as index lists, so the output compiles to an equal
/// token rather than reproducing the source text.
impl fmt::Display for AccessorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorToken::ArrayAccessor(index) => write!(f, "[{}]", index),
            AccessorToken::MultiArrayAccessor(indices) => {
                write!(f, "[")?;
                write_indices(f, indices)?;
                write!(f, "]")
            }
            AccessorToken::ArrayLengthBasedRangeAccessor(start, end, offset) => {
                write_range(f, *start, *end, *offset)
            }
            AccessorToken::ObjectAccessor(key) => {
                write!(f, "[")?;
                write_keys(f, std::slice::from_ref(key))?;
                write!(f, "]")
            }
            AccessorToken::MultiObjectAccessor(keys) => {
                write!(f, "[")?;
                write_keys(f, keys)?;
                write!(f, "]")
            }
            AccessorToken::DeepScanArrayAccessor(indices) => {
                write!(f, "..[")?;
                write_indices(f, indices)?;
                write!(f, "]")
            }
            AccessorToken::DeepScanLengthBasedArrayAccessor(start, end, offset) => {
                write!(f, "..")?;
                write_range(f, *start, *end, *offset)
            }
            AccessorToken::DeepScanObjectAccessor(keys) => {
                write!(f, "..[")?;
                write_keys(f, keys)?;
                write!(f, "]")
            }
        }
    }
}

/// A compiled path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    /// Tokens in application order.
    pub tokens: Vec<AccessorToken>,
}

impl JsonPath {
    /// Creates a new path from already compiled tokens.
    pub fn new(tokens: Vec<AccessorToken>) -> Self {
        Self { tokens }
    }

    /// Compiles an expression into a path.
    pub fn parse(expression: &str) -> Result<Self, super::PathError> {
        super::compile(expression).map(Self::new)
    }

    /// Returns true for the root-only path `$`.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for token in &self.tokens {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
