use super::token::AccessorToken;
use serde_yaml::{Mapping, Value};

pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Applies the tokens in order and returns every matched node.
    ///
    /// An empty token list selects the root itself.
    pub fn evaluate(&self, tokens: &[AccessorToken]) -> Vec<&'a Value> {
        let mut current: Vec<&'a Value> = vec![self.root];

        for token in tokens {
            let mut next = Vec::new();
            for &node in &current {
                next.extend(self.evaluate_token(node, token));
            }
            current = next;
        }

        current
    }

    /// Returns the first match, if any.
    pub fn first(&self, tokens: &[AccessorToken]) -> Option<&'a Value> {
        self.evaluate(tokens).into_iter().next()
    }

    fn evaluate_token(&self, node: &'a Value, token: &AccessorToken) -> Vec<&'a Value> {
        match token {
            AccessorToken::ArrayAccessor(idx) => self.get_array_element(node, *idx),
            AccessorToken::MultiArrayAccessor(indices) => {
                let mut results = Vec::new();
                for idx in indices {
                    results.extend(self.get_array_element(node, *idx));
                }
                results
            }
            AccessorToken::ArrayLengthBasedRangeAccessor(start, end, offset) => {
                self.get_range(node, *start, *end, *offset)
            }
            AccessorToken::ObjectAccessor(key) => self.find_child(node, key),
            AccessorToken::MultiObjectAccessor(keys) => {
                let mut results = Vec::new();
                for key in keys {
                    results.extend(self.find_child(node, key));
                }
                results
            }
            AccessorToken::DeepScanArrayAccessor(indices) => {
                self.deep_scan(node, &|n: &'a Value| {
                    let mut results = Vec::new();
                    for idx in indices {
                        results.extend(self.get_array_element(n, *idx));
                    }
                    results
                })
            }
            AccessorToken::DeepScanLengthBasedArrayAccessor(start, end, offset) => {
                self.deep_scan(node, &|n: &'a Value| self.get_range(n, *start, *end, *offset))
            }
            AccessorToken::DeepScanObjectAccessor(keys) => {
                self.deep_scan(node, &|n: &'a Value| {
                    let mut results = Vec::new();
                    for key in keys {
                        results.extend(self.find_child(n, key));
                    }
                    results
                })
            }
        }
    }

    fn find_child(&self, node: &'a Value, name: &str) -> Vec<&'a Value> {
        if let Value::Mapping(props) = node {
            if let Some(child) = lookup_key(props, name) {
                return vec![child];
            }
        }
        vec![]
    }

    fn get_array_element(&self, node: &'a Value, idx: isize) -> Vec<&'a Value> {
        if let Value::Sequence(items) = node {
            let len = items.len() as isize;
            let normalized_idx = if idx < 0 { len + idx } else { idx };

            if normalized_idx >= 0 && (normalized_idx as usize) < items.len() {
                return vec![&items[normalized_idx as usize]];
            }
        }
        vec![]
    }

    fn get_range(
        &self,
        node: &'a Value,
        start: isize,
        end: Option<isize>,
        offset: isize,
    ) -> Vec<&'a Value> {
        if let Value::Sequence(items) = node {
            let len = items.len() as isize;

            let start_idx = if start < 0 {
                (len + start).max(0)
            } else {
                start.min(len)
            };

            let end_idx = match end {
                Some(e) if e < 0 => (len + e).max(0),
                Some(e) => e.min(len),
                None => (len + offset).clamp(0, len),
            };

            if start_idx < end_idx {
                return items[start_idx as usize..end_idx as usize].iter().collect();
            }
        }
        vec![]
    }

    /// Applies `select` to `node` and then to every descendant, depth first.
    fn deep_scan(
        &self,
        node: &'a Value,
        select: &dyn Fn(&'a Value) -> Vec<&'a Value>,
    ) -> Vec<&'a Value> {
        let mut results = Vec::new();

        fn walk<'a>(
            node: &'a Value,
            select: &dyn Fn(&'a Value) -> Vec<&'a Value>,
            results: &mut Vec<&'a Value>,
        ) {
            results.extend(select(node));
            match node {
                Value::Mapping(props) => {
                    for (_, child) in props {
                        walk(child, select, results);
                    }
                }
                Value::Sequence(items) => {
                    for item in items {
                        walk(item, select, results);
                    }
                }
                Value::Tagged(tagged) => walk(&tagged.value, select, results),
                _ => {}
            }
        }

        walk(node, select, &mut results);
        results
    }
}

/// Finds a mapping entry by key.
///
/// YAML allows non-string keys, so scalar keys are compared by their plain
/// rendering: `['4']` finds both `"4": x` and `4: x`.
fn lookup_key<'a>(props: &'a Mapping, name: &str) -> Option<&'a Value> {
    if let Some(child) = props.get(name) {
        return Some(child);
    }
    props.iter().find_map(|(key, child)| {
        let matches = match key {
            Value::Number(n) => n.to_string() == name,
            Value::Bool(b) => b.to_string() == name,
            _ => false,
        };
        matches.then_some(child)
    })
}
