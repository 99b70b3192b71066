//! Classification orchestration
//!
//! Combines rule resolution, built-in inference, and the default-category
//! fallback into the final decision for one activity sample. This is the
//! only entry point the capture pipeline calls per sample, and it never
//! fails: every path degrades to a best-effort decision.

use timevault_domain::constants::FALLBACK_CATEGORY_NAME;
use timevault_domain::types::{ActivitySample, Category, Classification, Rule};

use crate::classification::inference::infer_category;
use crate::classification::resolver::resolve_rule;

/// Classify one sample against snapshots of the user's rules and categories.
///
/// Precedence: winning user rule, then built-in inference, then the default
/// category. A rule that assigns only a project still wins; its category
/// falls back to the default.
///
/// # Examples
/// ```
/// use timevault_core::classify;
/// use timevault_domain::types::{ActivitySample, Category, CategoryKind};
///
/// let categories = vec![Category::new("Coding", CategoryKind::Productive, "#22c55e")];
/// let sample = ActivitySample::new("Visual Studio Code", "main.ts");
///
/// let decision = classify(&sample, &[], &categories);
/// assert_eq!(decision.category_id, categories[0].id);
/// ```
pub fn classify(
    sample: &ActivitySample,
    rules: &[Rule],
    categories: &[Category],
) -> Classification {
    if let Some(rule) = resolve_rule(sample, rules) {
        let category_id = rule
            .category_id
            .clone()
            .unwrap_or_else(|| default_category_id(categories));
        return Classification { category_id, project_id: rule.project_id.clone() };
    }

    if let Some(category) = infer_category(sample, categories) {
        return Classification::category(category.id.clone());
    }

    Classification::category(default_category_id(categories))
}

/// Resolve the fallback category id.
///
/// Three-level degrade: the reserved "Uncategorized" category, else the
/// first category, else the empty id when the collection is empty. Storage
/// guarantees the reserved category at steady state, but import/restore and
/// first-run races must not crash the hot path.
pub fn default_category_id(categories: &[Category]) -> String {
    categories
        .iter()
        .find(|category| category.name == FALLBACK_CATEGORY_NAME)
        .or_else(|| categories.first())
        .map(|category| category.id.clone())
        .unwrap_or_default()
}
