use std::fmt;
use std::path::Path;

use log::debug;

use crate::domain::error::RuleError;
use crate::domain::report::VerifyReport;
use crate::domain::rules::RuleSet;
use crate::engine::placeholder::Placeholders;
use crate::io;

/// Supplies the placeholder set for one `check` call.
pub type PlaceholderSupplier = Box<dyn Fn() -> Option<Placeholders>>;

enum PlaceholderSource {
    None,
    Fixed(Placeholders),
    Supplied(PlaceholderSupplier),
}

/// Compares values against templates from a rule store.
///
/// The store is read and decoded once, at construction. A mismatch is a
/// normal `false` result; only lookup and substitution problems are errors.
pub struct RuleVerifier {
    rules: RuleSet,
    placeholders: PlaceholderSource,
}

impl RuleVerifier {
    /// Loads a rule store and applies no placeholders.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        Ok(Self::from_rule_set(load_rule_set(path.as_ref())?))
    }

    /// Loads a rule store and applies the same placeholder set on every check.
    pub fn load_with_placeholders(
        path: impl AsRef<Path>,
        placeholders: Placeholders,
    ) -> Result<Self, RuleError> {
        Ok(Self::load(path)?.with_placeholders(placeholders))
    }

    /// Loads a rule store and asks `supplier` for a placeholder set on every
    /// check, so values may change between checks.
    pub fn load_with_supplier<F>(path: impl AsRef<Path>, supplier: F) -> Result<Self, RuleError>
    where
        F: Fn() -> Option<Placeholders> + 'static,
    {
        Ok(Self::load(path)?.with_supplier(supplier))
    }

    pub fn from_rule_set(rules: RuleSet) -> Self {
        Self {
            rules,
            placeholders: PlaceholderSource::None,
        }
    }

    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = PlaceholderSource::Fixed(placeholders);
        self
    }

    pub fn with_supplier<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Option<Placeholders> + 'static,
    {
        self.placeholders = PlaceholderSource::Supplied(Box::new(supplier));
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the rule template after placeholder substitution.
    pub fn render(&self, rule_key: &str) -> Result<String, RuleError> {
        let template = self
            .rules
            .get(rule_key)
            .ok_or_else(|| RuleError::RuleNotFound {
                key: rule_key.to_string(),
                known_keys: self.rules.keys(),
            })?;

        let rendered = match &self.placeholders {
            PlaceholderSource::None => template.to_string(),
            PlaceholderSource::Fixed(placeholders) => substitute(placeholders, template)?,
            PlaceholderSource::Supplied(supplier) => match supplier() {
                Some(placeholders) => substitute(&placeholders, template)?,
                None => template.to_string(),
            },
        };
        Ok(rendered)
    }

    /// `true` iff the rendered rule equals `value` exactly.
    pub fn check(&self, rule_key: &str, value: &str) -> Result<bool, RuleError> {
        Ok(self.verify(rule_key, value)?.matched)
    }

    /// Like [`RuleVerifier::check`], keeping the rendered template for reporting.
    pub fn verify(&self, rule_key: &str, value: &str) -> Result<VerifyReport, RuleError> {
        let expected = self.render(rule_key)?;
        let matched = expected == value;
        debug!("rule `{rule_key}` matched: {matched}");
        Ok(VerifyReport {
            matched,
            rule: rule_key.to_string(),
            expected,
            actual: value.to_string(),
        })
    }
}

impl fmt::Debug for RuleVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let placeholders = match &self.placeholders {
            PlaceholderSource::None => "none",
            PlaceholderSource::Fixed(_) => "fixed",
            PlaceholderSource::Supplied(_) => "supplied",
        };
        f.debug_struct("RuleVerifier")
            .field("rules", &self.rules)
            .field("placeholders", &placeholders)
            .finish()
    }
}

fn substitute(placeholders: &Placeholders, template: &str) -> Result<String, RuleError> {
    if placeholders.is_empty() {
        return Ok(template.to_string());
    }
    Ok(placeholders.apply(template)?)
}

fn load_rule_set(path: &Path) -> Result<RuleSet, RuleError> {
    let display = path.display().to_string();
    let rules = io::read_flat_map(path)
        .map(RuleSet::new)
        .map_err(|error| RuleError::from_store(&display, error))?;
    debug!("loaded {} rule(s) from `{display}`", rules.len());
    Ok(rules)
}
