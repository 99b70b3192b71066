//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Name of the reserved fallback category.
///
/// Seeded by the storage layer at initialization; the classifier degrades
/// gracefully when it is missing.
pub const FALLBACK_CATEGORY_NAME: &str = "Uncategorized";

/// Priority assigned to rules created without an explicit priority.
pub const DEFAULT_RULE_PRIORITY: i32 = 0;
