//! Classification service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use timevault_domain::types::{ActivitySample, Classification, RuleDraft};
use timevault_domain::{Result, TimeVaultError};
use tracing::{debug, warn};

use super::classifier::classify;
use super::ports::{ActivityHistoryRepository, CategoryRepository, RuleRepository};
use super::suggestions::suggest_rules;

/// Classification service wiring the pure engine to storage snapshots
///
/// The capture pipeline calls [`classify_sample`](Self::classify_sample)
/// once per observed transition; the authoring UI calls
/// [`suggest_from_history`](Self::suggest_from_history) on demand.
pub struct ClassificationService {
    rules: Arc<dyn RuleRepository>,
    categories: Arc<dyn CategoryRepository>,
    history: Option<Arc<dyn ActivityHistoryRepository>>,
}

impl ClassificationService {
    /// Create a new classification service
    pub fn new(rules: Arc<dyn RuleRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { rules, categories, history: None }
    }

    /// Attach an activity history source for rule suggestions
    pub fn with_history(mut self, history: Arc<dyn ActivityHistoryRepository>) -> Self {
        self.history = Some(history);
        self
    }

    /// Classify one activity sample against fresh storage snapshots
    ///
    /// Always produces a decision; degraded category data is logged, never
    /// fatal.
    pub async fn classify_sample(&self, sample: &ActivitySample) -> Result<Classification> {
        let rules = self.rules.rules_snapshot().await?;
        let categories = self.categories.categories_snapshot().await?;

        if categories.is_empty() {
            warn!(app = %sample.app_name, "classifying with an empty category collection");
        }

        let decision = classify(sample, &rules, &categories);
        debug!(
            app = %sample.app_name,
            category_id = %decision.category_id,
            project_id = ?decision.project_id,
            "classified activity sample"
        );

        Ok(decision)
    }

    /// Generate draft rules from the activity history window
    ///
    /// Batch work off the hot path; results are advisory and never
    /// persisted here.
    pub async fn suggest_from_history(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RuleDraft>> {
        let history = self.history.as_ref().ok_or_else(|| {
            TimeVaultError::Config("no activity history source configured".to_string())
        })?;

        let activities = history.samples_between(start, end).await?;
        let categories = self.categories.categories_snapshot().await?;

        let drafts = suggest_rules(&activities, &categories);
        debug!(
            window_samples = activities.len(),
            drafts = drafts.len(),
            "generated rule suggestions"
        );

        Ok(drafts)
    }
}
