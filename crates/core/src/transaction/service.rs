//! Transaction service.

use std::sync::Arc;

use budgetbuddy_shared::types::{CategoryId, TransactionId, UserId};
use rust_decimal::Decimal;

use super::error::TransactionError;
use super::store::TransactionStore;
use super::types::{
    CreateTransactionInput, NewTransaction, Transaction, TransactionChanges, TransactionFilter,
    UpdateTransactionInput,
};
use crate::category::CategoryStore;
use crate::store::StoreError;

/// Longest accepted note.
pub const MAX_NOTE_LEN: usize = 255;

/// Decimal places kept for amounts.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest amount a `DECIMAL(12,2)` column holds: 9,999,999,999.99.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, AMOUNT_SCALE);

/// Transaction business logic.
#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl TransactionService {
    /// Creates a service over the given stores.
    #[must_use]
    pub fn new(
        transactions: Arc<dyn TransactionStore>,
        categories: Arc<dyn CategoryStore>,
    ) -> Self {
        Self {
            transactions,
            categories,
        }
    }

    /// Lists the user's transactions matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` when `from` is after `to`.
    pub async fn list(
        &self,
        user_id: UserId,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, TransactionError> {
        check_user(user_id)?;
        if let (Some(from), Some(to)) = (filter.from, filter.to)
            && from > to
        {
            return Err(TransactionError::InvalidDateRange { from, to });
        }

        Ok(self.transactions.find_by_user(user_id, &filter).await?)
    }

    /// Fetches one of the user's transactions.
    pub async fn get(
        &self,
        id: TransactionId,
        user_id: UserId,
    ) -> Result<Transaction, TransactionError> {
        self.transactions
            .find_one(id, user_id)
            .await?
            .ok_or(TransactionError::NotFound(id))
    }

    /// Records a new transaction.
    pub async fn create(
        &self,
        user_id: UserId,
        input: CreateTransactionInput,
    ) -> Result<Transaction, TransactionError> {
        check_user(user_id)?;
        let new = NewTransaction {
            user_id,
            category_id: input
                .category_id
                .ok_or(TransactionError::MissingField("category_id"))?,
            kind: input.kind.ok_or(TransactionError::MissingField("kind"))?,
            amount: check_amount(
                input
                    .amount
                    .ok_or(TransactionError::MissingField("amount"))?,
            )?,
            note: check_note(input.note)?,
            occurred_on: input
                .occurred_on
                .ok_or(TransactionError::MissingField("occurred_on"))?,
        };

        if self.categories.find_by_id(new.category_id).await?.is_none() {
            return Err(TransactionError::CategoryNotFound(new.category_id));
        }

        let category_id = new.category_id;
        self.transactions
            .insert(new)
            .await
            .map_err(|e| missing_category_or_store(e, category_id))
    }

    /// Applies a partial update to one of the user's transactions.
    pub async fn update(
        &self,
        id: TransactionId,
        user_id: UserId,
        input: UpdateTransactionInput,
    ) -> Result<Transaction, TransactionError> {
        let changes = TransactionChanges {
            category_id: input.category_id,
            kind: input.kind,
            amount: input.amount.map(check_amount).transpose()?,
            note: match input.note {
                Some(note) => Some(check_note(Some(note))?),
                None => None,
            },
            occurred_on: input.occurred_on,
        };

        if self.transactions.find_one(id, user_id).await?.is_none() {
            return Err(TransactionError::NotFound(id));
        }
        if let Some(category_id) = changes.category_id
            && self.categories.find_by_id(category_id).await?.is_none()
        {
            return Err(TransactionError::CategoryNotFound(category_id));
        }

        let category_id = changes.category_id;
        self.transactions
            .update(id, user_id, changes)
            .await
            .map_err(|e| match category_id {
                Some(category_id) => missing_category_or_store(e, category_id),
                None => TransactionError::Store(e),
            })?
            .ok_or(TransactionError::NotFound(id))
    }

    /// Deletes one of the user's transactions, returning whether it existed.
    pub async fn delete(&self, id: TransactionId, user_id: UserId) -> Result<bool, TransactionError> {
        Ok(self.transactions.delete(id, user_id).await?)
    }
}

fn check_user(user_id: UserId) -> Result<(), TransactionError> {
    if user_id.is_valid() {
        Ok(())
    } else {
        Err(TransactionError::InvalidUserId(user_id))
    }
}

fn check_amount(amount: Decimal) -> Result<Decimal, TransactionError> {
    if amount <= Decimal::ZERO {
        return Err(TransactionError::NonPositiveAmount);
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(TransactionError::TooPrecise { max: AMOUNT_SCALE });
    }
    if amount > MAX_AMOUNT {
        return Err(TransactionError::AmountTooLarge { max: MAX_AMOUNT });
    }
    Ok(amount)
}

/// The category vanished between the existence check and the write.
fn missing_category_or_store(err: StoreError, category_id: CategoryId) -> TransactionError {
    match err {
        StoreError::ReferenceViolation(_) => TransactionError::CategoryNotFound(category_id),
        other => TransactionError::Store(other),
    }
}

/// Trims the note; blank notes become `None`.
fn check_note(note: Option<String>) -> Result<Option<String>, TransactionError> {
    let Some(note) = note else {
        return Ok(None);
    };
    let note = note.trim();
    if note.is_empty() {
        return Ok(None);
    }
    if note.chars().count() > MAX_NOTE_LEN {
        return Err(TransactionError::NoteTooLong { max: MAX_NOTE_LEN });
    }
    Ok(Some(note.to_string()))
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
