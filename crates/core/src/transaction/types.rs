//! Transaction data types.

use budgetbuddy_shared::types::{CategoryId, TransactionId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// Convert to database string value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse from database string value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Owner.
    pub user_id: UserId,
    /// Category.
    pub category_id: CategoryId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional free-text note.
    pub note: Option<String>,
    /// Date the money moved.
    pub occurred_on: NaiveDate,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a transaction, as received from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionInput {
    /// Category.
    pub category_id: Option<CategoryId>,
    /// Income or expense.
    pub kind: Option<TransactionKind>,
    /// Amount, must be positive.
    pub amount: Option<Decimal>,
    /// Optional note.
    pub note: Option<String>,
    /// Date the money moved.
    pub occurred_on: Option<NaiveDate>,
}

/// Partial update; only present fields change. An empty `note` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransactionInput {
    /// New category.
    pub category_id: Option<CategoryId>,
    /// New kind.
    pub kind: Option<TransactionKind>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New note.
    pub note: Option<String>,
    /// New date.
    pub occurred_on: Option<NaiveDate>,
}

/// A validated transaction ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    /// Owner.
    pub user_id: UserId,
    /// Category.
    pub category_id: CategoryId,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional note.
    pub note: Option<String>,
    /// Date the money moved.
    pub occurred_on: NaiveDate,
}

/// Validated field changes handed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionChanges {
    /// New category.
    pub category_id: Option<CategoryId>,
    /// New kind.
    pub kind: Option<TransactionKind>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// `Some(None)` clears the note.
    pub note: Option<Option<String>>,
    /// New date.
    pub occurred_on: Option<NaiveDate>,
}

/// Equality and date-range filters for listing transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Only this kind.
    pub kind: Option<TransactionKind>,
    /// Only this category.
    pub category_id: Option<CategoryId>,
    /// Earliest `occurred_on`, inclusive.
    pub from: Option<NaiveDate>,
    /// Latest `occurred_on`, inclusive.
    pub to: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Filter covering `[from, to]` inclusive.
    #[must_use]
    pub const fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            kind: None,
            category_id: None,
            from: Some(from),
            to: Some(to),
        }
    }

    /// Whether `transaction` passes every filter.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.kind.is_none_or(|kind| transaction.kind == kind)
            && self
                .category_id
                .is_none_or(|id| transaction.category_id == id)
            && self.from.is_none_or(|from| transaction.occurred_on >= from)
            && self.to.is_none_or(|to| transaction.occurred_on <= to)
    }
}
