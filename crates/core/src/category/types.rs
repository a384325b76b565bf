//! Category data types.

use budgetbuddy_shared::types::CategoryId;
use serde::{Deserialize, Serialize};

/// Categories seeded into a fresh database as `(name, icon)`.
pub const DEFAULT_CATEGORIES: [(&str, &str); 10] = [
    ("food", "utensils"),
    ("transport", "bus"),
    ("shopping", "shopping-bag"),
    ("health", "heart-pulse"),
    ("education", "book"),
    ("bills", "receipt"),
    ("entertainment", "film"),
    ("savings", "piggy-bank"),
    ("salary", "briefcase"),
    ("others", "ellipsis"),
];

/// A spending or income category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name, unique ignoring case.
    pub name: String,
    /// Optional icon.
    pub icon: Option<String>,
}

/// Input for creating a category, as received from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategoryInput {
    /// Category name.
    pub name: Option<String>,
    /// Optional icon.
    pub icon: Option<String>,
}

/// A validated category ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Trimmed name.
    pub name: String,
    /// Optional icon.
    pub icon: Option<String>,
}
