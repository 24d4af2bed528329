//! Cache of compiled paths keyed by expression.
//!
//! Compilation happens while the cache lock is held, so concurrent lookups of
//! the same expression compile it at most once.

use crate::jsonpath::{JsonPath, PathError};
use indexmap::IndexMap;
use std::sync::{Arc, LazyLock, Mutex};

/// Default number of compiled paths kept by a cache.
pub const DEFAULT_CAPACITY: usize = 256;

/// Process-wide cache used by [`compile_cached`].
pub static GLOBAL_PATH_CACHE: LazyLock<PathCache> = LazyLock::new(PathCache::default);

/// Compiles `expression` through the process-wide cache.
pub fn compile_cached(expression: &str) -> Result<Arc<JsonPath>, PathError> {
    GLOBAL_PATH_CACHE.get_or_compile(expression)
}

/// Least-recently-used cache of compiled paths.
///
/// Entries are kept in access order: the front of the map is the next entry
/// to be evicted.
#[derive(Debug)]
pub struct PathCache {
    entries: Mutex<IndexMap<String, Arc<JsonPath>>>,
    capacity: usize,
}

impl Default for PathCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PathCache {
    /// Creates a cache holding at most `capacity` paths.
    ///
    /// A capacity of zero disables caching; every lookup compiles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
            capacity,
        }
    }

    /// Returns the compiled path for `expression`, compiling it on a miss.
    ///
    /// Failed compilations are returned to the caller and not cached.
    pub fn get_or_compile(&self, expression: &str) -> Result<Arc<JsonPath>, PathError> {
        if self.capacity == 0 {
            return JsonPath::parse(expression).map(Arc::new);
        }

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(index) = entries.get_index_of(expression) {
            log::debug!("path cache hit: {}", expression);
            let last = entries.len() - 1;
            entries.move_index(index, last);
            if let Some((_, path)) = entries.get_index(last) {
                return Ok(Arc::clone(path));
            }
        }

        log::debug!("path cache miss: {}", expression);
        let path = Arc::new(JsonPath::parse(expression)?);

        if entries.len() >= self.capacity {
            if let Some((evicted, _)) = entries.shift_remove_index(0) {
                log::debug!("path cache evicted: {}", evicted);
            }
        }
        entries.insert(expression.to_string(), Arc::clone(&path));

        Ok(path)
    }

    /// Returns the cached path without compiling or touching access order.
    pub fn peek(&self, expression: &str) -> Option<Arc<JsonPath>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(expression)
            .cloned()
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every cached path.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}
