//! Regex engine with recoverable pattern errors

use std::fmt;
use std::num::NonZeroUsize;

use lru::LruCache;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::catalogue::{FEATURE_DEMOS, PATTERN_EXAMPLES};
use crate::error::{RegexError, Result};

/// Default number of compiled patterns kept in the cache
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Default size limit for a compiled pattern, in bytes
pub const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

static EXAMPLE_LINES: Lazy<Vec<String>> =
    Lazy::new(|| PATTERN_EXAMPLES.iter().map(ToString::to_string).collect());

/// Tuning knobs for [`RegexEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Compiled patterns to keep, keyed by pattern string. Zero disables caching.
    pub cache_capacity: usize,
    /// Upper bound on the size of a compiled pattern
    pub size_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Validates, searches and replaces patterns against arbitrary text
///
/// All operations take `&self` and hold no state that is observable from
/// outside, so a single engine can be shared between threads. The compile
/// cache only avoids recompiling a pattern that was seen recently.
pub struct RegexEngine {
    size_limit: usize,
    cache: Option<Mutex<LruCache<String, Regex>>>,
}

impl RegexEngine {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Create an engine with explicit options
    pub fn with_options(options: EngineOptions) -> Self {
        RegexEngine {
            size_limit: options.size_limit,
            cache: NonZeroUsize::new(options.cache_capacity)
                .map(|capacity| Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Compile `pattern`, reusing a cached program when one exists
    pub fn compile(&self, pattern: &str) -> Result<Regex> {
        if let Some(cache) = &self.cache {
            if let Some(regex) = cache.lock().get(pattern) {
                return Ok(regex.clone());
            }
        }

        let regex = RegexBuilder::new(pattern)
            .size_limit(self.size_limit)
            .build()
            .map_err(|e| RegexError::invalid_pattern(pattern, &e))?;

        if let Some(cache) = &self.cache {
            cache.lock().put(pattern.to_string(), regex.clone());
        }
        debug!(pattern = %pattern, "compiled regex pattern");
        Ok(regex)
    }

    /// Whether `pattern` compiles
    pub fn validate(&self, pattern: &str) -> bool {
        self.compile(pattern).is_ok()
    }

    /// Every non-overlapping match of `pattern` in `text`, first to last
    pub fn try_search<'t>(&self, text: &'t str, pattern: &str) -> Result<Vec<&'t str>> {
        let regex = self.compile(pattern)?;
        Ok(regex.find_iter(text).map(|m| m.as_str()).collect())
    }

    /// Like [`try_search`](Self::try_search), but an invalid pattern is
    /// logged and yields no matches
    pub fn search<'t>(&self, text: &'t str, pattern: &str) -> Vec<&'t str> {
        match self.try_search(text, pattern) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(pattern = %pattern, error = %e.description(), "Invalid regex pattern");
                Vec::new()
            }
        }
    }

    /// Replace every non-overlapping match of `pattern` in `text`
    ///
    /// `replacement` is handed to the regex crate untouched, so `$1`,
    /// `${name}` and `$$` keep their usual meaning.
    pub fn try_replace(&self, text: &str, pattern: &str, replacement: &str) -> Result<String> {
        let regex = self.compile(pattern)?;
        Ok(regex.replace_all(text, replacement).into_owned())
    }

    /// Like [`try_replace`](Self::try_replace), but an invalid pattern is
    /// logged and the text comes back unchanged
    pub fn replace(&self, text: &str, pattern: &str, replacement: &str) -> String {
        match self.try_replace(text, pattern, replacement) {
            Ok(replaced) => replaced,
            Err(e) => {
                warn!(pattern = %pattern, error = %e.description(), "Invalid regex pattern");
                text.to_string()
            }
        }
    }

    /// The static example catalogue, one `"<pattern>  : <description>"` line each
    pub fn list_examples(&self) -> &'static [String] {
        &EXAMPLE_LINES
    }

    /// Run the demo patterns against `text`, one summary line per pattern
    pub fn feature_demo(&self, text: &str) -> Vec<String> {
        FEATURE_DEMOS
            .iter()
            .map(|demo| {
                let matches = self.search(text, demo.pattern);
                format!("{}: [{}]", demo.label, matches.join(", "))
            })
            .collect()
    }

    /// Number of compiled patterns currently cached
    pub fn cached_patterns(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.lock().len())
    }
}

impl Default for RegexEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexEngine")
            .field("size_limit", &self.size_limit)
            .field("cached_patterns", &self.cached_patterns())
            .finish()
    }
}
