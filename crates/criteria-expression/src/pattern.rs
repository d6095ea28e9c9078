//! Regular-expression support for the `matches` operator.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Compiles pattern text into a regex. Installed on an evaluator to replace
/// the default per-reduction compilation, e.g. with a [`PatternCache`].
pub type PatternFactory = dyn Fn(&str) -> Result<Arc<Regex>, regex::Error> + Send + Sync;

/// Flags a regex literal may carry after its closing `/`.
pub const REGEX_FLAGS: &[char] = &['g', 'i', 'm'];

/// Folds literal flags into an inline `(?flags)` group understood by the
/// regex engine. `g` only affects repeated matching and is dropped.
pub fn with_flags(pattern: &str, flags: &[char]) -> String {
    let mut inline = String::new();
    for flag in flags {
        if *flag != 'g' && !inline.contains(*flag) {
            inline.push(*flag);
        }
    }
    if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{}){}", inline, pattern)
    }
}

pub fn compile(pattern: &str) -> Result<Arc<Regex>, regex::Error> {
    Regex::new(pattern).map(Arc::new)
}

/// Compiled-pattern cache that can be shared between evaluations and
/// threads.
///
/// Entries are never evicted: every distinct pattern stays compiled for the
/// life of the cache. Callers that feed in unbounded pattern text (e.g.
/// patterns supplied by a resolver) should call [`PatternCache::clear`]
/// periodically or use a short-lived cache.
#[derive(Default)]
pub struct PatternCache {
    compiled: Mutex<HashMap<String, Arc<Regex>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        PatternCache::default()
    }

    pub fn get(&self, pattern: &str) -> Result<Arc<Regex>, regex::Error> {
        let mut compiled = self
            .compiled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(regex) = compiled.get(pattern) {
            return Ok(Arc::clone(regex));
        }
        let regex = compile(pattern)?;
        compiled.insert(pattern.to_string(), Arc::clone(&regex));
        Ok(regex)
    }

    pub fn len(&self) -> usize {
        self.compiled
            .lock()
            .map(|compiled| compiled.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every compiled pattern.
    pub fn clear(&self) {
        self.compiled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    /// Wraps the cache as a [`PatternFactory`].
    pub fn into_factory(self: Arc<Self>) -> Arc<PatternFactory> {
        Arc::new(move |pattern: &str| self.get(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_translation() {
        assert_eq!(with_flags("ab", &[]), "ab");
        assert_eq!(with_flags("ab", &['i']), "(?i)ab");
        assert_eq!(with_flags("ab", &['g']), "ab");
        assert_eq!(with_flags("ab", &['m', 'i', 'g', 'i']), "(?mi)ab");
    }

    #[test]
    fn test_translated_flags_compile() {
        let re = compile(&with_flags("^ab$", &['i', 'm'])).unwrap();
        assert!(re.is_match("x\nAB\ny"));
    }

    #[test]
    fn test_cache_reuses_compiled_patterns() {
        let cache = Arc::new(PatternCache::new());
        let a = cache.get("a+").unwrap();
        let b = cache.get("a+").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("(").is_err());
        assert_eq!(cache.len(), 1);

        let factory = Arc::clone(&cache).into_factory();
        assert!(factory("b").unwrap().is_match("abc"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_clear() {
        let cache = PatternCache::new();
        let before = cache.get("a+").unwrap();
        cache.get("b+").unwrap();
        cache.clear();
        assert!(cache.is_empty());
        let after = cache.get("a+").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(cache.len(), 1);
    }
}
