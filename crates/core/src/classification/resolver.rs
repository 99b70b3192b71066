//! Rule resolution
//!
//! Selects the winning rule for a sample from the user's rule set: enabled
//! rules only, highest priority first, ties broken by input order.

use std::cmp::Reverse;

use timevault_domain::types::{ActivitySample, Rule};

use crate::classification::matcher::condition_matches;

/// Resolve the winning rule for a sample, or `None` when no enabled rule
/// matches.
///
/// The sort is stable, so equal-priority rules keep their relative order in
/// the input set; the input itself is never reordered.
pub fn resolve_rule<'a>(sample: &ActivitySample, rules: &'a [Rule]) -> Option<&'a Rule> {
    let mut enabled: Vec<&Rule> = rules.iter().filter(|rule| rule.is_enabled).collect();
    enabled.sort_by_key(|rule| Reverse(rule.priority));

    enabled.into_iter().find(|rule| condition_matches(sample, &rule.condition))
}
