//! Record store abstraction.
//!
//! Services depend on the repository traits declared next to each domain module
//! (`BudgetStore`, `TransactionStore`, ...). This module holds what they share:
//! the store error, the bundle handed to the services, timestamp helpers and an
//! in-memory implementation.

mod error;
pub mod memory;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

pub use error::StoreError;
pub use memory::MemoryStore;

use crate::auth::UserStore;
use crate::budget::{BudgetStore, SpendingLookup};
use crate::category::CategoryStore;
use crate::transaction::TransactionStore;

/// Every repository the services need, behind trait objects.
#[derive(Clone)]
pub struct Stores {
    /// User accounts.
    pub users: Arc<dyn UserStore>,
    /// Spending categories.
    pub categories: Arc<dyn CategoryStore>,
    /// Income and expense transactions.
    pub transactions: Arc<dyn TransactionStore>,
    /// Monthly budgets.
    pub budgets: Arc<dyn BudgetStore>,
    /// Spent amounts per category and month.
    pub spending: Arc<dyn SpendingLookup>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}

/// Timestamp for a record being modified.
///
/// Always strictly later than `previous`, even when the clock has not advanced
/// past it (the stores keep microsecond precision).
#[must_use]
pub fn touched_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = truncate_to_micros(Utc::now());
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Current time at the precision the stores keep.
#[must_use]
pub fn now() -> DateTime<Utc> {
    truncate_to_micros(Utc::now())
}

fn truncate_to_micros(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_micros(ts.timestamp_micros()).unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touched_at_is_strictly_later() {
        let future = Utc::now() + Duration::seconds(5);
        let touched = touched_at(future);
        assert!(touched > future);
        assert_eq!(touched - future, Duration::microseconds(1));
    }

    #[test]
    fn test_touched_at_uses_clock_when_ahead() {
        let past = Utc::now() - Duration::seconds(5);
        assert!(touched_at(past) > past + Duration::seconds(4));
    }

    #[test]
    fn test_now_has_microsecond_precision() {
        let ts = now();
        assert_eq!(ts.timestamp_subsec_nanos() % 1000, 0);
    }
}
