//! Rule condition matching
//!
//! Evaluates one candidate condition against an activity sample. Pure and
//! deterministic; a malformed user regex counts as a non-match and never
//! reaches the caller as an error.

use regex::RegexBuilder;
use timevault_domain::types::{ActivitySample, RuleCondition, RuleOperator};

/// Test a single condition against a sample.
///
/// Non-regex operators compare case-folded copies of both sides unless the
/// condition is case-sensitive. The regex operator is applied to the
/// original, unfolded source string; case-insensitivity comes from the
/// pattern flag instead.
pub fn condition_matches(sample: &ActivitySample, condition: &RuleCondition) -> bool {
    let source = condition.field.select(sample);

    match condition.operator {
        RuleOperator::Regex => regex_matches(source, condition),
        op if condition.case_sensitive => string_op_matches(op, source, &condition.value),
        op => string_op_matches(op, &source.to_lowercase(), &condition.value.to_lowercase()),
    }
}

/// Plain string operators over already-folded operands.
fn string_op_matches(operator: RuleOperator, haystack: &str, needle: &str) -> bool {
    match operator {
        RuleOperator::Contains => haystack.contains(needle),
        RuleOperator::Equals => haystack == needle,
        RuleOperator::StartsWith => haystack.starts_with(needle),
        RuleOperator::EndsWith => haystack.ends_with(needle),
        // Dispatched before folding; a regex value is never folded.
        RuleOperator::Regex => false,
    }
}

/// Compile and apply a user-supplied pattern.
///
/// Authoring-time validation can be bypassed by import/restore, so compile
/// failures here must stay silent: the condition simply does not match and
/// resolution moves on to lower-priority rules.
fn regex_matches(source: &str, condition: &RuleCondition) -> bool {
    RegexBuilder::new(&condition.value)
        .case_insensitive(!condition.case_sensitive)
        .build()
        .map(|pattern| pattern.is_match(source))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timevault_domain::types::RuleField;

    fn sample() -> ActivitySample {
        ActivitySample::new("Google Chrome", "Weekly Report - Google Docs")
            .with_url("https://docs.google.com/document/d/abc123")
    }

    fn condition(operator: RuleOperator, value: &str) -> RuleCondition {
        RuleCondition::new(RuleField::AppName, operator, value)
    }

    #[test]
    fn test_contains_is_substring_test() {
        assert!(condition_matches(&sample(), &condition(RuleOperator::Contains, "chrome")));
        assert!(!condition_matches(&sample(), &condition(RuleOperator::Contains, "firefox")));
    }

    #[test]
    fn test_equals_requires_whole_string() {
        assert!(condition_matches(&sample(), &condition(RuleOperator::Equals, "google chrome")));
        assert!(!condition_matches(&sample(), &condition(RuleOperator::Equals, "google")));
    }

    #[test]
    fn test_starts_with_and_ends_with() {
        assert!(condition_matches(&sample(), &condition(RuleOperator::StartsWith, "google")));
        assert!(condition_matches(&sample(), &condition(RuleOperator::EndsWith, "chrome")));
        assert!(!condition_matches(&sample(), &condition(RuleOperator::StartsWith, "chrome")));
    }

    #[test]
    fn test_case_folding_applies_to_both_sides() {
        let folded = condition(RuleOperator::Equals, "Chrome");
        let lower_app = ActivitySample::new("chrome", "");
        assert!(condition_matches(&lower_app, &folded));

        let strict = condition(RuleOperator::Equals, "Chrome").case_sensitive(true);
        assert!(!condition_matches(&lower_app, &strict));
    }

    #[test]
    fn test_url_field_on_native_app_reads_empty() {
        let native = ActivitySample::new("Xcode", "main.swift");
        let url_contains =
            RuleCondition::new(RuleField::Url, RuleOperator::Contains, "docs.google.com");
        assert!(!condition_matches(&native, &url_contains));
    }

    #[test]
    fn test_empty_contains_value_matches_everything() {
        // Accepted behavior at match time; the validator rejects it at
        // authoring time.
        assert!(condition_matches(&sample(), &condition(RuleOperator::Contains, "")));
    }

    #[test]
    fn test_regex_operator_matches_unfolded_source() {
        let pattern = condition(RuleOperator::Regex, r"^Google\s");
        assert!(condition_matches(&sample(), &pattern));

        let strict = condition(RuleOperator::Regex, r"^google\s").case_sensitive(true);
        assert!(!condition_matches(&sample(), &strict));
    }

    #[test]
    fn test_regex_case_insensitive_by_flag() {
        let pattern = condition(RuleOperator::Regex, r"google chrome$");
        assert!(condition_matches(&sample(), &pattern));
    }

    #[test]
    fn test_malformed_regex_never_matches() {
        let broken = condition(RuleOperator::Regex, "(unterminated");
        assert!(!condition_matches(&sample(), &broken));
    }
}
