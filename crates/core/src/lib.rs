//! # TimeVault Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains the activity classification engine:
//! - Rule matching, resolution, and validation
//! - Built-in pattern inference for common apps and sites
//! - The classification orchestrator and rule suggestion generator
//! - Port/adapter interfaces (traits) for the storage snapshots
//!
//! ## Architecture Principles
//! - Only depends on `timevault-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod classification;

// Re-export specific items to avoid ambiguity
pub use classification::classifier::classify;
pub use classification::ports::{ActivityHistoryRepository, CategoryRepository, RuleRepository};
pub use classification::validator::{validate_condition, validate_draft, RuleValidationError};
pub use classification::ClassificationService;
