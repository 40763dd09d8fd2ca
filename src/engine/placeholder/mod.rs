//! Flat placeholder substitution.
//!
//! A placeholder is a key wrapped in a prefix and a suffix (`{` and `}` by
//! default). Three kinds of entries can be registered:
//!
//! * literal entries, fixed at registration time ([`Placeholders::add`]);
//! * lazy entries, whose supplier runs once per [`Placeholders::apply`] call
//!   ([`Placeholders::add_lazy`]);
//! * pattern entries, whose transform receives the captures of each match
//!   ([`Placeholders::add_pattern`]).
//!
//! # Keys are patterns
//!
//! The prefix and suffix are matched literally, but **the key is compiled as a
//! regular expression fragment and is not escaped**. `add("a.c", ..)` replaces
//! `{abc}` as well as `{a.c}`. Pattern entries depend on this to capture
//! substructure, e.g. `add_pattern(r"item(\d+)", ..)`. Use
//! [`Placeholders::add_escaped`] when the key must be taken verbatim.
//!
//! # Substitution
//!
//! All keys are matched against the original input in one pass. Matches are
//! ordered by position and the output is assembled from the untouched gaps and
//! the replacement values, so replacement lengths never shift other matches.
//! Two matches that share any input text make `apply` fail with
//! [`PlaceholderError::OverlapConflict`] before anything is substituted. This
//! includes the same key registered under two entry kinds: both rules match the
//! same span, so the conflict is reported whenever that key occurs in the input.

mod plan;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use log::debug;
use regex::Captures;

use crate::domain::error::{ConfigError, PlaceholderError};
use crate::io;

use self::plan::{CompiledRule, Source};

pub const DEFAULT_PREFIX: &str = "{";
pub const DEFAULT_SUFFIX: &str = "}";

/// Produces the current value of a lazy entry.
pub type Supplier = Box<dyn Fn() -> String>;

/// Produces the replacement for one match of a pattern entry.
pub type Transform = Box<dyn Fn(&Captures<'_>) -> String>;

pub struct Placeholders {
    prefix: String,
    suffix: String,
    literals: BTreeMap<String, String>,
    lazies: BTreeMap<String, Supplier>,
    patterns: BTreeMap<String, Transform>,
}

impl Placeholders {
    /// Creates an empty set with the default `{` / `}` delimiters.
    pub fn of() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            literals: BTreeMap::new(),
            lazies: BTreeMap::new(),
            patterns: BTreeMap::new(),
        }
    }

    /// Loads literal entries from a flat JSON, YAML or TOML object.
    ///
    /// Keys read from the file are data, so they are registered through
    /// [`Placeholders::add_escaped`] and match only their exact text.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let entries = io::read_flat_map(path)?;
        debug!(
            "loaded {} placeholder(s) from `{}`",
            entries.len(),
            path.display()
        );
        Ok(entries
            .into_iter()
            .fold(Self::of(), |set, (key, value)| set.add_escaped(&key, value)))
    }

    /// Registers a literal entry, replacing any previous literal for `key`.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.literals.insert(key.into(), value.into());
        self
    }

    /// Registers a literal entry whose key is matched verbatim.
    pub fn add_escaped(self, key: &str, value: impl Into<String>) -> Self {
        self.add(regex::escape(key), value)
    }

    /// Registers a lazy entry, replacing any previous lazy entry for `key`.
    pub fn add_lazy<F>(mut self, key: impl Into<String>, supplier: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        self.lazies.insert(key.into(), Box::new(supplier));
        self
    }

    /// Registers a pattern entry, replacing any previous pattern entry for `key`.
    ///
    /// Group 0 of the captures is the whole placeholder including delimiters;
    /// groups declared inside the key are numbered from 1.
    pub fn add_pattern<F>(mut self, key: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&Captures<'_>) -> String + 'static,
    {
        self.patterns.insert(key.into(), Box::new(transform));
        self
    }

    pub fn define_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn define_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wraps `key` with the current delimiters.
    pub fn wrap(&self, key: &str) -> String {
        format!("{}{key}{}", self.prefix, self.suffix)
    }

    /// Evaluates a lazy entry without applying anything.
    pub fn get(&self, key: &str) -> Result<String, PlaceholderError> {
        self.lazies
            .get(key)
            .map(|supplier| supplier())
            .ok_or_else(|| PlaceholderError::NotFound {
                key: key.to_string(),
            })
    }

    /// Number of registered entries across all three kinds.
    pub fn len(&self) -> usize {
        self.literals.len() + self.lazies.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Substitutes every registered placeholder in `input`.
    pub fn apply(&self, input: &str) -> Result<String, PlaceholderError> {
        let rules = self.compile_rules()?;
        let hits = plan::order_hits(&rules, plan::find_hits(&rules, input))?;
        debug!(
            "substituting {} placeholder match(es) from {} rule(s)",
            hits.len(),
            rules.len()
        );

        let mut lazy_values: Vec<Option<String>> = vec![None; rules.len()];
        let mut output = String::with_capacity(input.len());
        let mut cursor = 0;
        for hit in &hits {
            let span = hit.span();
            output.push_str(&input[cursor..span.start]);
            match &rules[hit.rule].source {
                Source::Literal(value) => output.push_str(value),
                Source::Lazy(supplier) => {
                    let value = lazy_values[hit.rule].get_or_insert_with(|| supplier());
                    output.push_str(value);
                }
                Source::Pattern(transform) => output.push_str(&transform(&hit.captures)),
            }
            cursor = span.end;
        }
        output.push_str(&input[cursor..]);

        Ok(output)
    }

    fn compile_rules(&self) -> Result<Vec<CompiledRule<'_>>, PlaceholderError> {
        let literals = self
            .literals
            .iter()
            .map(|(key, value)| (key.as_str(), Source::Literal(value.as_str())));
        let lazies = self
            .lazies
            .iter()
            .map(|(key, supplier)| (key.as_str(), Source::Lazy(supplier)));
        let patterns = self
            .patterns
            .iter()
            .map(|(key, transform)| (key.as_str(), Source::Pattern(transform)));

        literals
            .chain(lazies)
            .chain(patterns)
            .map(|(key, source)| {
                plan::compile(&self.prefix, &self.suffix, key)
                    .map(|regex| CompiledRule { key, regex, source })
            })
            .collect()
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::of()
    }
}

impl fmt::Debug for Placeholders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placeholders")
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("literals", &self.literals)
            .field("lazies", &self.lazies.keys().collect::<Vec<_>>())
            .field("patterns", &self.patterns.keys().collect::<Vec<_>>())
            .finish()
    }
}
