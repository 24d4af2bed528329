//! pathlite - compile compact path expressions and query YAML/JSON documents.
//!
//! ```
//! use pathlite::jsonpath::{Evaluator, JsonPath};
//!
//! let doc: serde_yaml::Value = serde_yaml::from_str("users: [{name: Alice}, {name: Bob}]").unwrap();
//! let path = JsonPath::parse("$['users']..['name']").unwrap();
//! let names: Vec<_> = Evaluator::new(&doc)
//!     .evaluate(&path.tokens)
//!     .into_iter()
//!     .filter_map(|v| v.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Alice", "Bob"]);
//! ```

pub mod cache;
pub mod config;
pub mod file;
pub mod jsonpath;
