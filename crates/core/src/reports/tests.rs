//! Property-based and service tests for the reports module.

use std::collections::HashMap;
use std::sync::Arc;

use budgetbuddy_shared::types::{CategoryId, CycleMonth, TransactionId, UserId};
use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calc;
use crate::transaction::{Transaction, TransactionKind};

fn tx(id: i64, category: i64, kind: TransactionKind, amount: Decimal, on: NaiveDate) -> Transaction {
    let now = Utc::now();
    Transaction {
        id: TransactionId(id),
        user_id: UserId(1),
        category_id: CategoryId(category),
        kind,
        amount,
        note: None,
        occurred_on: on,
        created_at: now,
        updated_at: now,
    }
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Income), Just(TransactionKind::Expense)]
}

proptest! {
    /// Category shares add up to 100 within rounding.
    #[test]
    fn test_category_percents_sum_to_hundred(
        rows in prop::collection::vec((1i64..=10, 1i64..1_000_000), 1..40),
    ) {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transactions: Vec<Transaction> = rows
            .iter()
            .enumerate()
            .map(|(i, (cat, cents))| {
                tx(i64::try_from(i).unwrap(), *cat, TransactionKind::Expense, Decimal::new(*cents, 2), day)
            })
            .collect();

        let breakdown = calc::category_breakdown(&transactions, &HashMap::new());
        let sum: Decimal = breakdown.iter().map(|c| c.percent).sum();

        prop_assert!((sum - dec!(100)).abs() <= dec!(0.05), "sum was {}", sum);
    }

    /// Breakdown is sorted by amount descending, ties by category id.
    #[test]
    fn test_category_breakdown_ordering(
        rows in prop::collection::vec((1i64..=10, 1i64..100), 1..40),
    ) {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let transactions: Vec<Transaction> = rows
            .iter()
            .enumerate()
            .map(|(i, (cat, amount))| {
                tx(i64::try_from(i).unwrap(), *cat, TransactionKind::Expense, Decimal::from(*amount), day)
            })
            .collect();

        let breakdown = calc::category_breakdown(&transactions, &HashMap::new());
        for pair in breakdown.windows(2) {
            prop_assert!(
                pair[0].amount > pair[1].amount
                    || (pair[0].amount == pair[1].amount && pair[0].category_id < pair[1].category_id)
            );
        }
    }

    /// The yearly breakdown has twelve months that add up to the year totals.
    #[test]
    fn test_monthly_breakdown_sums_to_year(
        rows in prop::collection::vec((1u32..=12, 1u32..=28, kind_strategy(), 1i64..100_000), 0..60),
    ) {
        let transactions: Vec<Transaction> = rows
            .iter()
            .enumerate()
            .map(|(i, (month, day, kind, amount))| {
                let on = NaiveDate::from_ymd_opt(2023, *month, *day).unwrap();
                tx(i64::try_from(i).unwrap(), 1, *kind, Decimal::from(*amount), on)
            })
            .collect();

        let breakdown = calc::monthly_breakdown(2023, &transactions);
        let year = calc::totals(&transactions);

        prop_assert_eq!(breakdown.len(), 12);
        let income: Decimal = breakdown.iter().map(|m| m.totals.total_income).sum();
        let expense: Decimal = breakdown.iter().map(|m| m.totals.total_expense).sum();
        prop_assert_eq!(income, year.total_income);
        prop_assert_eq!(expense, year.total_expense);
        prop_assert_eq!(year.net_balance, year.total_income - year.total_expense);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::reports::{ReportError, ReportPeriod};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_totals_split_income_and_expense() {
        let transactions = vec![
            tx(1, 1, TransactionKind::Income, dec!(3000), date(2024, 1, 1)),
            tx(2, 2, TransactionKind::Expense, dec!(1200.50), date(2024, 1, 2)),
            tx(3, 3, TransactionKind::Expense, dec!(99.50), date(2024, 1, 3)),
        ];

        let totals = calc::totals(&transactions);
        assert_eq!(totals.total_income, dec!(3000));
        assert_eq!(totals.total_expense, dec!(1300));
        assert_eq!(totals.net_balance, dec!(1700));
    }

    #[test]
    fn test_category_breakdown_ignores_income_and_names_rows() {
        let transactions = vec![
            tx(1, 1, TransactionKind::Expense, dec!(75), date(2024, 1, 1)),
            tx(2, 2, TransactionKind::Expense, dec!(25), date(2024, 1, 2)),
            tx(3, 2, TransactionKind::Income, dec!(500), date(2024, 1, 3)),
        ];
        let names = HashMap::from([(CategoryId(1), "food".to_string())]);

        let rows = calc::category_breakdown(&transactions, &names);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category_name, "food");
        assert_eq!(rows[0].percent, dec!(75));
        assert_eq!(rows[1].category_name, "");
        assert_eq!(rows[1].percent, dec!(25));
    }

    #[test]
    fn test_share_rounds_to_two_places() {
        assert_eq!(calc::share(dec!(1), dec!(3)), dec!(33.33));
        assert_eq!(calc::share(dec!(2), dec!(3)), dec!(66.67));
        assert_eq!(calc::share(dec!(5), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_period_resolution() {
        let today = date(2024, 6, 15);

        assert_eq!(
            ReportPeriod::resolve(Some("2024-02"), Some("2020"), today).unwrap(),
            ReportPeriod::Month(CycleMonth::new(2024, 2).unwrap())
        );
        assert_eq!(
            ReportPeriod::resolve(None, Some("2023"), today).unwrap(),
            ReportPeriod::Year(2023)
        );
        assert_eq!(
            ReportPeriod::resolve(None, None, today).unwrap(),
            ReportPeriod::Month(CycleMonth::new(2024, 6).unwrap())
        );
        assert!(matches!(
            ReportPeriod::resolve(Some("2024/02"), None, today),
            Err(ReportError::InvalidMonth(_))
        ));
        assert!(matches!(
            ReportPeriod::resolve(None, Some("twenty"), today),
            Err(ReportError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_period_date_ranges() {
        let feb = ReportPeriod::Month(CycleMonth::new(2024, 2).unwrap());
        assert_eq!(feb.date_range(), (date(2024, 2, 1), date(2024, 2, 29)));
        assert_eq!(
            ReportPeriod::Year(2023).date_range(),
            (date(2023, 1, 1), date(2023, 12, 31))
        );
    }
}

#[cfg(test)]
mod service_tests {
    use super::*;
    use crate::budget::{BudgetService, CreateBudgetInput, VarianceStatus};
    use crate::category::{CategoryService, CreateCategoryInput};
    use crate::reports::{ReportError, ReportPeriod, ReportService, Summary};
    use crate::store::MemoryStore;
    use crate::transaction::{CreateTransactionInput, TransactionService};

    const USER: UserId = UserId(1);

    struct Fixture {
        reports: ReportService,
        budgets: BudgetService,
        transactions: TransactionService,
        food: CategoryId,
        salary: CategoryId,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let categories = CategoryService::new(store.clone());
        let food = categories
            .create(CreateCategoryInput {
                name: Some("food".into()),
                icon: None,
            })
            .await
            .unwrap()
            .id;
        let salary = categories
            .create(CreateCategoryInput {
                name: Some("salary".into()),
                icon: None,
            })
            .await
            .unwrap()
            .id;

        Fixture {
            reports: ReportService::new(store.clone(), store.clone(), store.clone()),
            budgets: BudgetService::new(store.clone(), store.clone(), store.clone()),
            transactions: TransactionService::new(store.clone(), store),
            food,
            salary,
        }
    }

    async fn record(
        fx: &Fixture,
        user: UserId,
        category_id: CategoryId,
        kind: TransactionKind,
        amount: Decimal,
        on: (i32, u32, u32),
    ) -> Transaction {
        fx.transactions
            .create(
                user,
                CreateTransactionInput {
                    category_id: Some(category_id),
                    kind: Some(kind),
                    amount: Some(amount),
                    note: None,
                    occurred_on: NaiveDate::from_ymd_opt(on.0, on.1, on.2),
                },
            )
            .await
            .unwrap()
    }

    fn march() -> CycleMonth {
        CycleMonth::new(2024, 3).unwrap()
    }

    #[tokio::test]
    async fn test_month_summary_is_scoped_to_user_and_month() {
        let fx = fixture().await;
        record(&fx, USER, fx.salary, TransactionKind::Income, dec!(5000), (2024, 3, 1)).await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(320), (2024, 3, 31)).await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(999), (2024, 4, 1)).await;
        record(&fx, UserId(2), fx.food, TransactionKind::Expense, dec!(999), (2024, 3, 5)).await;

        let Summary::Month(summary) = fx
            .reports
            .summary(USER, ReportPeriod::Month(march()))
            .await
            .unwrap()
        else {
            panic!("expected a month summary");
        };
        assert_eq!(summary.totals.total_income, dec!(5000));
        assert_eq!(summary.totals.total_expense, dec!(320));
        assert_eq!(summary.totals.net_balance, dec!(4680));
    }

    #[tokio::test]
    async fn test_year_summary_has_twelve_months() {
        let fx = fixture().await;
        record(&fx, USER, fx.salary, TransactionKind::Income, dec!(100), (2024, 1, 10)).await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(40), (2024, 12, 31)).await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(7), (2025, 1, 1)).await;

        let Summary::Year(summary) = fx
            .reports
            .summary(USER, ReportPeriod::Year(2024))
            .await
            .unwrap()
        else {
            panic!("expected a year summary");
        };
        assert_eq!(summary.monthly_breakdown.len(), 12);
        assert_eq!(summary.monthly_breakdown[0].totals.total_income, dec!(100));
        assert_eq!(summary.monthly_breakdown[11].totals.total_expense, dec!(40));
        assert_eq!(summary.year_totals.net_balance, dec!(60));
    }

    #[tokio::test]
    async fn test_income_vs_expense_for_year() {
        let fx = fixture().await;
        record(&fx, USER, fx.salary, TransactionKind::Income, dec!(100), (2024, 2, 10)).await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(150), (2024, 9, 1)).await;

        let report = fx
            .reports
            .income_vs_expense(USER, ReportPeriod::Year(2024))
            .await
            .unwrap();
        assert_eq!(report.income, dec!(100));
        assert_eq!(report.expense, dec!(150));
        assert_eq!(report.net_balance, dec!(-50));
    }

    #[tokio::test]
    async fn test_expenses_by_category_uses_category_names() {
        let fx = fixture().await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(30), (2024, 3, 2)).await;
        record(&fx, USER, fx.salary, TransactionKind::Expense, dec!(10), (2024, 3, 3)).await;

        let report = fx
            .reports
            .expenses_by_category(USER, ReportPeriod::Month(march()))
            .await
            .unwrap();
        assert_eq!(report.total_expense, dec!(40));
        assert_eq!(report.categories[0].category_name, "food");
        assert_eq!(report.categories[0].percent, dec!(75));
        assert_eq!(report.categories[1].category_name, "salary");
    }

    #[tokio::test]
    async fn test_monthly_close_compares_with_budgets() {
        let fx = fixture().await;
        fx.budgets
            .create(
                USER,
                CreateBudgetInput {
                    category_id: Some(fx.food),
                    cycle_month: Some("2024-03".into()),
                    budget_amount: Some(dec!(400)),
                },
            )
            .await
            .unwrap();
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(300), (2024, 3, 2)).await;
        record(&fx, USER, fx.salary, TransactionKind::Income, dec!(2000), (2024, 3, 25)).await;

        let close = fx.reports.monthly_close(USER, march()).await.unwrap();
        assert_eq!(close.budget_count, 1);
        assert_eq!(close.totals.net_balance, dec!(1700));
        assert_eq!(close.budget_performance.total_budgeted, dec!(400));
        assert_eq!(close.budget_performance.total_spent, dec!(300));
        assert_eq!(close.budget_performance.variance, dec!(100));
        assert_eq!(close.budget_performance.performance_percentage, dec!(75));
        assert_eq!(close.budget_performance.status, VarianceStatus::Favorable);
    }

    #[tokio::test]
    async fn test_monthly_close_without_budgets() {
        let fx = fixture().await;
        record(&fx, USER, fx.food, TransactionKind::Expense, dec!(10), (2024, 3, 2)).await;

        let close = fx.reports.monthly_close(USER, march()).await.unwrap();
        assert_eq!(close.budget_performance.performance_percentage, Decimal::ZERO);
        assert_eq!(close.budget_performance.variance, dec!(-10));
    }

    #[tokio::test]
    async fn test_recent_transactions_pages_newest_first() {
        let fx = fixture().await;
        let mut created = Vec::new();
        for day in 1..=5 {
            created.push(
                record(&fx, USER, fx.food, TransactionKind::Expense, dec!(1), (2024, 3, day)).await,
            );
        }

        let first = fx.reports.recent_transactions(USER, 1, 2).await.unwrap();
        assert_eq!(first.meta.total, 5);
        assert_eq!(first.meta.total_pages, 3);
        assert!(first.meta.has_next);
        assert!(!first.meta.has_previous);
        assert_eq!(first.data[0].id, created[4].id);
        assert_eq!(first.data[1].id, created[3].id);

        let last = fx.reports.recent_transactions(USER, 3, 2).await.unwrap();
        assert_eq!(last.data.len(), 1);
        assert_eq!(last.data[0].id, created[0].id);
        assert!(!last.meta.has_next);
        assert!(last.meta.has_previous);

        assert!(matches!(
            fx.reports.recent_transactions(USER, 0, 2).await,
            Err(ReportError::InvalidPagination { field: "page" })
        ));
    }
}
