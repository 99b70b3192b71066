//! Activity categories
//!
//! Categories label classified time as productive, neutral, or distracting.
//! A stock set is installed by the storage layer at first launch; users can
//! add, edit, and delete their own afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::FALLBACK_CATEGORY_NAME;

/// Productivity weighting of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Productive,
    Neutral,
    Distraction,
}

/// A user-visible activity category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: CategoryKind,
    pub color: String,
    pub icon: Option<String>,
}

/// Stock categories seeded at storage initialization.
///
/// The built-in pattern table resolves against these names; the last entry
/// is the reserved classification fallback.
const DEFAULT_CATEGORY_SEED: &[(&str, CategoryKind, &str, &str)] = &[
    ("Coding", CategoryKind::Productive, "#22c55e", "code"),
    ("Design", CategoryKind::Productive, "#8b5cf6", "palette"),
    ("Writing", CategoryKind::Productive, "#06b6d4", "pencil"),
    ("Communication", CategoryKind::Productive, "#3b82f6", "chat"),
    ("Reference", CategoryKind::Neutral, "#f59e0b", "book"),
    ("Learning", CategoryKind::Neutral, "#eab308", "graduation"),
    ("Planning", CategoryKind::Neutral, "#84cc16", "calendar"),
    ("Social Media", CategoryKind::Distraction, "#ef4444", "users"),
    ("Entertainment", CategoryKind::Distraction, "#f97316", "play"),
    ("Shopping", CategoryKind::Distraction, "#ec4899", "cart"),
    (FALLBACK_CATEGORY_NAME, CategoryKind::Neutral, "#6b7280", "question"),
];

impl Category {
    /// Create a category with a freshly minted id.
    pub fn new(name: impl Into<String>, kind: CategoryKind, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            color: color.into(),
            icon: None,
        }
    }

    /// Set the icon slug shown by the UI.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Materialize the stock category set with fresh ids.
    ///
    /// Called by the storage layer when it initializes an empty database.
    pub fn seed_defaults() -> Vec<Self> {
        DEFAULT_CATEGORY_SEED
            .iter()
            .map(|(name, kind, color, icon)| Self::new(*name, *kind, *color).with_icon(*icon))
            .collect()
    }
}
