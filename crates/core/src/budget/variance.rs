//! Budget-versus-actual performance for a month.

use rust_decimal::Decimal;
use serde::Serialize;

use super::types::VarianceStatus;

/// How a month's spending compares with what was budgeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetPerformance {
    /// Sum of the month's budgets.
    pub total_budgeted: Decimal,
    /// The month's total expense.
    pub total_spent: Decimal,
    /// `total_budgeted - total_spent`.
    pub variance: Decimal,
    /// `total_spent / total_budgeted * 100`, rounded to 2 dp; 0 with no budget.
    pub performance_percentage: Decimal,
    /// Under, over or exactly on budget.
    pub status: VarianceStatus,
}

impl BudgetPerformance {
    /// Compares spending with the budgeted total.
    ///
    /// Under budget is favorable, over budget is unfavorable.
    #[must_use]
    pub fn new(total_budgeted: Decimal, total_spent: Decimal) -> Self {
        let variance = total_budgeted - total_spent;

        let performance_percentage = if total_budgeted.is_zero() {
            Decimal::ZERO
        } else {
            (total_spent / total_budgeted * Decimal::ONE_HUNDRED).round_dp(2)
        };

        let status = match variance.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => VarianceStatus::Favorable,
            std::cmp::Ordering::Less => VarianceStatus::Unfavorable,
            std::cmp::Ordering::Equal => VarianceStatus::OnBudget,
        };

        Self {
            total_budgeted,
            total_spent,
            variance,
            performance_percentage,
            status,
        }
    }
}
