//! Facade composing the regex engine and the person registry

use std::collections::HashSet;
use std::path::Path;

use textproc_config::AppConfig;
use textproc_regex::{EngineOptions, RegexEngine, RegexError, TextStats};
use textproc_registry::{Person, PersonRegistry, RegistryError};
use tracing::info;

/// Single entry point for the presentation layer
///
/// The two components share no state; the facade only forwards calls and
/// converts borrowed results into owned ones where a front end needs them.
#[derive(Debug, Default)]
pub struct TextProcessor {
    engine: RegexEngine,
    registry: PersonRegistry,
}

impl TextProcessor {
    /// Create a facade with default engine options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a facade configured from `config`
    pub fn from_config(config: &AppConfig) -> Self {
        TextProcessor {
            engine: RegexEngine::with_options(EngineOptions {
                cache_capacity: config.regex.cache_capacity,
                size_limit: config.regex.size_limit,
            }),
            registry: PersonRegistry::new(),
        }
    }

    pub fn search_text(&self, text: &str, pattern: &str) -> Vec<String> {
        self.engine
            .search(text, pattern)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn replace_text(&self, text: &str, pattern: &str, replacement: &str) -> String {
        self.engine.replace(text, pattern, replacement)
    }

    pub fn validate_pattern(&self, pattern: &str) -> bool {
        self.engine.validate(pattern)
    }

    /// Compile `pattern`, keeping the compiler's error for display
    pub fn check_pattern(&self, pattern: &str) -> Result<(), RegexError> {
        self.engine.compile(pattern).map(|_| ())
    }

    pub fn list_examples(&self) -> &'static [String] {
        self.engine.list_examples()
    }

    pub fn feature_demo(&self, text: &str) -> Vec<String> {
        self.engine.feature_demo(text)
    }

    pub fn text_stats(&self, text: &str) -> TextStats {
        TextStats::of(text)
    }

    pub fn create_person(&mut self, name: &str, age: u32) -> Result<(), RegistryError> {
        self.registry.create(name, age)
    }

    pub fn update_person(&mut self, name: &str, age: u32) -> Result<(), RegistryError> {
        self.registry.update(name, age)
    }

    pub fn delete_person(&mut self, name: &str) -> Result<Person, RegistryError> {
        self.registry.delete(name)
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<&Person> {
        self.registry.lookup(name)
    }

    pub fn list_all(&self) -> Vec<&Person> {
        self.registry.list_all()
    }

    pub fn list_unique(&self) -> HashSet<&Person> {
        self.registry.list_unique()
    }

    /// Write `text` to `path` verbatim
    pub fn save_result(&self, path: &Path, text: &str) -> std::io::Result<()> {
        std::fs::write(path, text)?;
        info!(path = %path.display(), bytes = text.len(), "Saved result");
        Ok(())
    }
}
