//! User projects
//!
//! Rules reference projects by id only; the classifier treats the id as an
//! opaque token and never checks that the project still exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user project that classified time can be billed against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: String,
    pub is_billable: bool,
    pub hourly_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a non-billable project with a freshly minted id.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            is_billable: false,
            hourly_rate: None,
            created_at: now,
            updated_at: now,
        }
    }
}
