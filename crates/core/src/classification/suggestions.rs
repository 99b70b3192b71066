//! Rule suggestion generation
//!
//! Offline batch analysis of historical activity: every distinct app name
//! and URL hostname that the built-in table can classify becomes a draft
//! rule for the user to confirm. Never on the classification hot path, and
//! nothing here is persisted; partial results are safe to discard.

use ahash::AHashSet;
use timevault_domain::types::{ActivitySample, Category, RuleCondition, RuleDraft, RuleField, RuleOperator};
use url::Url;

use crate::classification::inference::infer_category;

/// Propose draft rules from an activity history window.
///
/// App names and hostnames share one dedup set keyed by the literal value a
/// draft would carry, so each value is considered exactly once, at its first
/// occurrence. Unparseable URLs are skipped per-item; the rest of the batch
/// proceeds.
pub fn suggest_rules(activities: &[ActivitySample], categories: &[Category]) -> Vec<RuleDraft> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut drafts = Vec::new();

    for activity in activities {
        if seen.insert(activity.app_name.clone()) {
            if let Some(category) = infer_category(activity, categories) {
                drafts.push(RuleDraft::categorize(
                    RuleCondition::new(
                        RuleField::AppName,
                        RuleOperator::Equals,
                        activity.app_name.clone(),
                    ),
                    category.id.clone(),
                ));
            }
        }

        let Some(url) = activity.url.as_deref() else {
            continue;
        };
        let Some(hostname) = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string))
        else {
            continue;
        };

        if seen.insert(hostname.clone()) {
            if let Some(category) = infer_category(activity, categories) {
                drafts.push(RuleDraft::categorize(
                    RuleCondition::new(RuleField::Url, RuleOperator::Contains, hostname),
                    category.id.clone(),
                ));
            }
        }
    }

    drafts
}
