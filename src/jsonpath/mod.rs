//! Path compiler and evaluator for structural document queries.
//!
//! A path expression is compiled once into a list of [`AccessorToken`]s, which
//! the [`Evaluator`] then applies to a parsed document.
//!
//! # Supported Syntax
//!
//! - `$` - Root node
//! - `[index]` - Array index (supports negative indices)
//! - `[i,j,k]` - Several array indices
//! - `[start:end]` - Array slicing (either bound optional, negatives allowed)
//! - `['key']` - Object key
//! - `['key1','key2']` - Several object keys
//! - `..[...]` - Deep scan: apply the next bracket at every depth
//!
//! # Examples
//!
//! ```
//! use pathlite::jsonpath::{compile, AccessorToken};
//!
//! let tokens = compile("$[2]..['name','id']").unwrap();
//! assert_eq!(tokens[0], AccessorToken::ArrayAccessor(2));
//! assert_eq!(
//!     tokens[1],
//!     AccessorToken::DeepScanObjectAccessor(vec!["name".to_string(), "id".to_string()])
//! );
//! ```

pub mod classifier;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod token;

pub use classifier::{compile_bracket, MAX_EXPANDED_SLICE};
pub use compiler::compile;
pub use error::PathError;
pub use evaluator::Evaluator;
pub use matcher::find_matching_close;
pub use token::{AccessorToken, JsonPath};
