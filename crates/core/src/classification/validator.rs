//! Authoring-time rule validation
//!
//! Called synchronously by the rule-authoring form before a rule reaches
//! storage. The matcher re-checks regex safety on its own at match time, so
//! data that bypassed this layer (import, restore) still cannot crash the
//! hot path.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use timevault_domain::types::{ActivitySample, RuleCondition, RuleDraft, RuleOperator};

use crate::classification::matcher::condition_matches;

/// Why a candidate rule was rejected at authoring time.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleValidationError {
    #[error("Value cannot be empty")]
    EmptyValue,

    #[error("Invalid regular expression")]
    InvalidRegex,

    #[error("Rule must assign a category or a project")]
    MissingAction,
}

/// Check a condition for structural validity.
///
/// Rejects empty or whitespace-only values, and regex values that do not
/// compile. Everything else is left to normal string-operator semantics.
pub fn validate_condition(condition: &RuleCondition) -> Result<(), RuleValidationError> {
    if condition.value.trim().is_empty() {
        return Err(RuleValidationError::EmptyValue);
    }

    if condition.operator == RuleOperator::Regex && regex::Regex::new(&condition.value).is_err() {
        return Err(RuleValidationError::InvalidRegex);
    }

    Ok(())
}

/// Validate a whole draft: its condition, plus the invariant that a rule
/// without any action target is meaningless.
pub fn validate_draft(draft: &RuleDraft) -> Result<(), RuleValidationError> {
    validate_condition(&draft.condition)?;

    if draft.category_id.is_none() && draft.project_id.is_none() {
        return Err(RuleValidationError::MissingAction);
    }

    Ok(())
}

/// Samples partitioned by whether a candidate condition matches them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionPreview {
    pub matched: Vec<ActivitySample>,
    pub unmatched: Vec<ActivitySample>,
}

/// Dry-run a condition against sample data for the authoring UI's
/// "test this rule" affordance.
pub fn preview_condition(condition: &RuleCondition, samples: &[ActivitySample]) -> ConditionPreview {
    let mut preview = ConditionPreview::default();

    for sample in samples {
        if condition_matches(sample, condition) {
            preview.matched.push(sample.clone());
        } else {
            preview.unmatched.push(sample.clone());
        }
    }

    preview
}
