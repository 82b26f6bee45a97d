//! Input validation for scheduling runs.
//!
//! Checks structural integrity of an item list before scheduling.
//! Detects:
//! - Duplicate names
//! - Zero burst times
//!
//! The scheduling engine does not require validation: it is total over any
//! item list. Validation is for callers that build items by hand.

use crate::models::Item;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two items share the same name.
    DuplicateName,
    /// An item has a burst time of zero.
    ZeroBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an item list.
///
/// Checks:
/// 1. No duplicate item names
/// 2. Every burst time is at least 1
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_items(items: &[Item]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for item in items {
        if !names.insert(item.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate item name: {}", item.name),
            ));
        }
        if item.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Item '{}' has zero burst time", item.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
