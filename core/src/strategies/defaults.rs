#![deny(missing_docs)]

//! # Default Strategies
//!
//! Prefix-based exclusion of framework classes and package-based tagging.

use crate::error::{AppError, AppResult};
use crate::metamodel::{ActionDescriptor, TypeDescriptor};
use crate::strategies::traits::{ClassExcluder, Tagger};
use regex::Regex;

/// Class name prefixes treated as framework internals.
const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["org.apache.isis.", "isisaddons.", "java.", "javax."];

/// Tag for operations on framework classes.
pub const INTERNALS_TAG: &str = ". apache isis internals";

/// Excludes types and contributed actions whose class matches a prefix.
#[derive(Debug, Clone)]
pub struct DefaultClassExcluder {
    prefixes: Vec<String>,
}

impl DefaultClassExcluder {
    /// Excluder with the framework prefixes.
    pub fn new() -> Self {
        Self {
            prefixes: DEFAULT_EXCLUDED_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Adds a further prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    fn excluded(&self, class_name: &str) -> bool {
        self.prefixes.iter().any(|p| class_name.starts_with(p.as_str()))
    }
}

impl Default for DefaultClassExcluder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassExcluder for DefaultClassExcluder {
    fn exclude_type(&self, ty: &TypeDescriptor) -> bool {
        self.excluded(&ty.class_name)
    }

    fn exclude_action(&self, action: &ActionDescriptor) -> bool {
        action
            .contributed_by
            .as_deref()
            .is_some_and(|class_name| self.excluded(class_name))
    }
}

/// Tags operations by package.
///
/// Rules are tried in order; the first capture group of the first matching
/// rule is the tag. Framework classes share one tag. Otherwise the last
/// package segment is used, and a class in the default package falls back to
/// `fallback` or its own name.
#[derive(Debug, Clone)]
pub struct DefaultTagger {
    rules: Vec<Regex>,
}

impl DefaultTagger {
    /// Tagger with the built-in module rules.
    pub fn new() -> Self {
        // Literal patterns; compiled once per tagger.
        let rules = [
            r"^org\.incode\.module\.([^.]+)\..*$",
            r"^org\.isisaddons\.module\.([^.]+)\..*$",
            r"^org\.isisaddons\.wicket\.([^.]+)\..*$",
        ];
        Self {
            rules: rules.iter().filter_map(|r| Regex::new(r).ok()).collect(),
        }
    }

    /// Adds a rule; its first capture group becomes the tag.
    pub fn with_rule(mut self, pattern: &str) -> AppResult<Self> {
        let rule = Regex::new(pattern)
            .map_err(|e| AppError::General(format!("Invalid tag rule '{}': {}", pattern, e)))?;
        self.rules.push(rule);
        Ok(self)
    }
}

impl Default for DefaultTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for DefaultTagger {
    fn tag_for(&self, class_name: &str, fallback: Option<&str>) -> String {
        for rule in &self.rules {
            if let Some(tag) = rule.captures(class_name).and_then(|c| c.get(1)) {
                return tag.as_str().to_string();
            }
        }

        if class_name.starts_with("org.apache.isis.") {
            return INTERNALS_TAG.to_string();
        }

        match class_name.rsplit_once('.') {
            Some((package, _)) => package
                .rsplit('.')
                .next()
                .unwrap_or(package)
                .to_string(),
            None => fallback.unwrap_or(class_name).to_string(),
        }
    }
}
