//! Compiled pattern caching
//!
//! Patterns are usually a small fixed set queried on every location change,
//! so compiled specs are kept in an LRU keyed by the pattern string.

use crate::pattern::CompiledPattern;
use crate::trace_log;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::rc::Rc;

/// Cache performance statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub evictions: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, `0.0` before any lookup
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU of compiled patterns.
///
/// Default capacity: 1000 patterns. A capacity of zero is bumped to one.
#[derive(Debug)]
pub struct PatternCache {
    patterns: LruCache<String, Rc<CompiledPattern>>,
    stats: CacheStats,
}

impl PatternCache {
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Cache holding at most `capacity` patterns (minimum one)
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            patterns: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Return the compiled form of `pattern`, compiling it on a miss.
    pub fn get_or_compile(&mut self, pattern: &str) -> Rc<CompiledPattern> {
        if let Some(compiled) = self.patterns.get(pattern) {
            self.stats.hits += 1;
            trace_log!("Pattern cache hit for '{}'", pattern);
            return Rc::clone(compiled);
        }

        self.stats.misses += 1;
        trace_log!("Pattern cache miss for '{}'", pattern);

        let compiled = Rc::new(CompiledPattern::compile(pattern));
        if self
            .patterns
            .push(pattern.to_string(), Rc::clone(&compiled))
            .is_some()
        {
            self.stats.evictions += 1;
        }
        compiled
    }

    /// Drop every cached pattern
    pub fn clear(&mut self) {
        trace_log!("Clearing pattern cache");
        self.patterns.clear();
    }

    /// Counters since creation or the last reset
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zero the counters
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Maximum number of cached patterns
    pub fn capacity(&self) -> usize {
        self.patterns.cap().get()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
