//! Port interfaces for activity classification
//!
//! The engine reads per-invocation snapshots of the user's rules and
//! categories; adapters over the document store implement these traits.
//! Snapshots are owned copies, so concurrent edits in the store are never
//! observed mid-classification.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use timevault_domain::types::{ActivitySample, Category, Rule};
use timevault_domain::Result;

/// Supplies the current rule set snapshot.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// All persisted rules, enabled or not, in storage order.
    async fn rules_snapshot(&self) -> Result<Vec<Rule>>;
}

/// Supplies the current category collection snapshot.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All persisted categories in storage order.
    async fn categories_snapshot(&self) -> Result<Vec<Category>>;
}

/// Supplies historical activity samples for batch analysis.
///
/// Only the suggestion generator reads history; the classification hot path
/// never touches it.
#[async_trait]
pub trait ActivityHistoryRepository: Send + Sync {
    /// Samples observed within a time window, oldest first.
    async fn samples_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ActivitySample>>;
}
