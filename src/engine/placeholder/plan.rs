use std::ops::Range;

use regex::{Captures, Regex};

use crate::domain::error::PlaceholderError;
use crate::engine::placeholder::{Supplier, Transform};

/// Where the replacement text of a compiled rule comes from.
pub(crate) enum Source<'a> {
    Literal(&'a str),
    Lazy(&'a Supplier),
    Pattern(&'a Transform),
}

pub(crate) struct CompiledRule<'a> {
    pub key: &'a str,
    pub regex: Regex,
    pub source: Source<'a>,
}

/// One match of one rule against the untouched input.
#[derive(Debug)]
pub(crate) struct Hit<'h> {
    pub rule: usize,
    pub captures: Captures<'h>,
}

impl Hit<'_> {
    pub fn span(&self) -> Range<usize> {
        self.captures.get_match().range()
    }
}

/// Delimiters are matched literally; the key itself stays a live pattern
/// fragment inside a non-capturing group. The key must be a well-formed
/// pattern on its own, so unbalanced groups cannot reach past the delimiters.
pub(crate) fn compile(prefix: &str, suffix: &str, key: &str) -> Result<Regex, PlaceholderError> {
    let invalid = |source| PlaceholderError::InvalidPattern {
        key: key.to_string(),
        source,
    };
    Regex::new(key).map_err(invalid)?;
    let pattern = format!("{}(?:{key}){}", regex::escape(prefix), regex::escape(suffix));
    Regex::new(&pattern).map_err(invalid)
}

/// Collects every non-empty match of every rule against `input`.
pub(crate) fn find_hits<'h>(rules: &[CompiledRule<'_>], input: &'h str) -> Vec<Hit<'h>> {
    let mut hits = Vec::new();
    for (rule, compiled) in rules.iter().enumerate() {
        for captures in compiled.regex.captures_iter(input) {
            let whole = captures.get_match();
            if whole.start() < whole.end() {
                hits.push(Hit { rule, captures });
            }
        }
    }
    hits
}

/// Orders hits by position and rejects any two that share input text.
pub(crate) fn order_hits<'h>(
    rules: &[CompiledRule<'_>],
    mut hits: Vec<Hit<'h>>,
) -> Result<Vec<Hit<'h>>, PlaceholderError> {
    hits.sort_by_key(|hit| {
        let span = hit.span();
        (span.start, span.end, hit.rule)
    });

    for pair in hits.windows(2) {
        let (first, second) = (pair[0].span(), pair[1].span());
        if second.start < first.end {
            return Err(PlaceholderError::OverlapConflict {
                first_key: rules[pair[0].rule].key.to_string(),
                first_start: first.start,
                first_end: first.end,
                second_key: rules[pair[1].rule].key.to_string(),
                second_start: second.start,
                second_end: second.end,
            });
        }
    }

    Ok(hits)
}
