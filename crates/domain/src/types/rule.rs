//! User-defined classification rules
//!
//! A rule pairs a predicate over an activity sample with an action: assign a
//! category, a project, or both. Rules are owned and edited by the user
//! through the storage layer; the classifier only reads snapshots of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::activity::ActivitySample;

/// Which attribute of an [`ActivitySample`] a condition tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleField {
    AppName,
    WindowTitle,
    Url,
}

impl RuleField {
    /// Select the source string for this field from a sample.
    ///
    /// Absent URLs read as the empty string, so URL conditions evaluate
    /// uniformly against native apps.
    pub fn select<'a>(&self, sample: &'a ActivitySample) -> &'a str {
        match self {
            Self::AppName => &sample.app_name,
            Self::WindowTitle => &sample.window_title,
            Self::Url => sample.url_or_empty(),
        }
    }
}

/// String comparison applied by a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleOperator {
    Contains,
    Equals,
    StartsWith,
    EndsWith,
    Regex,
}

/// The predicate half of a rule.
///
/// Immutable once attached to a persisted rule; edits replace the whole
/// rule. `case_sensitive` defaults to false on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCondition {
    pub field: RuleField,
    pub operator: RuleOperator,
    pub value: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl RuleCondition {
    /// Case-insensitive condition (the authoring UI default).
    pub fn new(field: RuleField, operator: RuleOperator, value: impl Into<String>) -> Self {
        Self { field, operator, value: value.into(), case_sensitive: false }
    }

    /// Toggle case-sensitive matching.
    pub fn case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }
}

/// A persisted classification rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub condition: RuleCondition,
    pub category_id: Option<String>,
    pub project_id: Option<String>,
    /// Higher priorities are evaluated first; ties keep input order.
    pub priority: i32,
    /// Disabled rules are skipped during resolution but remain in storage.
    pub is_enabled: bool,
    /// Set once at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

impl Rule {
    /// Promote a draft into a persistable rule, minting id and timestamp.
    pub fn from_draft(draft: RuleDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            condition: draft.condition,
            category_id: draft.category_id,
            project_id: draft.project_id,
            priority: draft.priority,
            is_enabled: draft.is_enabled,
            created_at: Utc::now(),
        }
    }
}

/// An unpersisted rule proposal.
///
/// Produced by the suggestion generator and by the authoring form before
/// storage mints identity. Carries everything a [`Rule`] does except id and
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDraft {
    pub condition: RuleCondition,
    pub category_id: Option<String>,
    pub project_id: Option<String>,
    pub priority: i32,
    pub is_enabled: bool,
}

impl RuleDraft {
    /// Draft an enabled, default-priority rule assigning a category.
    pub fn categorize(condition: RuleCondition, category_id: impl Into<String>) -> Self {
        Self {
            condition,
            category_id: Some(category_id.into()),
            project_id: None,
            priority: crate::constants::DEFAULT_RULE_PRIORITY,
            is_enabled: true,
        }
    }
}
