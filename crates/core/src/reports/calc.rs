//! Pure report calculations over already fetched transactions.

use std::collections::HashMap;

use budgetbuddy_shared::types::{CategoryId, CycleMonth};
use rust_decimal::Decimal;

use super::types::{CategoryExpense, MonthlyTotals, PeriodTotals};
use crate::transaction::{Transaction, TransactionKind};

/// Income and expense totals over `transactions`.
#[must_use]
pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> PeriodTotals {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => total_income += tx.amount,
            TransactionKind::Expense => total_expense += tx.amount,
        }
    }

    PeriodTotals {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}

/// Twelve monthly totals for `year`; transactions outside the year are ignored.
#[must_use]
pub fn monthly_breakdown(year: i32, transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    CycleMonth::months_of_year(year)
        .map(|month| MonthlyTotals {
            month,
            totals: totals(
                transactions
                    .iter()
                    .filter(|tx| month.contains(tx.occurred_on)),
            ),
        })
        .collect()
}

/// Expense per category with its share of the total.
///
/// Ordered by amount descending, then category id. Income is ignored.
#[must_use]
pub fn category_breakdown(
    transactions: &[Transaction],
    names: &HashMap<CategoryId, String>,
) -> Vec<CategoryExpense> {
    let mut by_category: HashMap<CategoryId, Decimal> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Expense)
    {
        *by_category.entry(tx.category_id).or_default() += tx.amount;
    }

    let total: Decimal = by_category.values().copied().sum();

    let mut rows: Vec<CategoryExpense> = by_category
        .into_iter()
        .map(|(category_id, amount)| CategoryExpense {
            category_id,
            category_name: names.get(&category_id).cloned().unwrap_or_default(),
            amount,
            percent: share(amount, total),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    rows
}

/// `part / total * 100` rounded to 2 dp; 0 for an empty total.
#[must_use]
pub fn share(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        Decimal::ZERO
    } else {
        (part / total * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
