//! Classification decision types

use serde::{Deserialize, Serialize};

/// The outcome of classifying one activity sample.
///
/// `category_id` is always populated with a best-effort decision; it is the
/// empty string only in the degenerate case where the category collection
/// itself is empty. `project_id` is set only when a matching rule assigns
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category_id: String,
    pub project_id: Option<String>,
}

impl Classification {
    /// Decision carrying a category but no project assignment.
    pub fn category(category_id: impl Into<String>) -> Self {
        Self { category_id: category_id.into(), project_id: None }
    }
}
