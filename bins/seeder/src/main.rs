//! Demo data seeder for BudgetBuddy development.
//!
//! Registers a demo user, then gives it budgets and transactions for the
//! current and previous month. Safe to re-run: an existing demo user is left
//! untouched.
//!
//! Usage: cargo run --bin seeder

use budgetbuddy_core::auth::{AccountError, AccountService, User};
use budgetbuddy_core::budget::{BudgetError, BudgetService, CreateBudgetInput};
use budgetbuddy_core::category::{Category, CategoryService};
use budgetbuddy_core::transaction::{CreateTransactionInput, TransactionKind, TransactionService};
use budgetbuddy_shared::auth::RegisterRequest;
use budgetbuddy_shared::types::{CategoryId, CycleMonth};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "demo1234";

/// Monthly budgets per category name.
const BUDGETS: [(&str, Decimal); 5] = [
    ("food", dec!(600)),
    ("transport", dec!(150)),
    ("bills", dec!(320)),
    ("entertainment", dec!(120)),
    ("shopping", dec!(200)),
];

/// `(category, kind, amount, day of month, note)`.
const MONTH_ACTIVITY: [(&str, TransactionKind, Decimal, u32, &str); 10] = [
    ("salary", TransactionKind::Income, dec!(3200), 1, "Monthly salary"),
    ("bills", TransactionKind::Expense, dec!(95.40), 3, "Electricity"),
    ("food", TransactionKind::Expense, dec!(82.15), 4, "Groceries"),
    ("transport", TransactionKind::Expense, dec!(45), 5, "Transit pass"),
    ("bills", TransactionKind::Expense, dec!(210), 7, "Rent share"),
    ("food", TransactionKind::Expense, dec!(36.80), 11, "Dinner out"),
    ("entertainment", TransactionKind::Expense, dec!(14.99), 12, "Streaming"),
    ("shopping", TransactionKind::Expense, dec!(129.50), 16, "Running shoes"),
    ("food", TransactionKind::Expense, dec!(104.60), 19, "Groceries"),
    ("health", TransactionKind::Expense, dec!(25), 22, "Pharmacy"),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = budgetbuddy_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    let stores = budgetbuddy_db::stores(&db);

    let accounts = AccountService::new(stores.users.clone());
    let categories = CategoryService::new(stores.categories.clone());
    let budgets = BudgetService::new(
        stores.budgets.clone(),
        stores.categories.clone(),
        stores.spending.clone(),
    );
    let transactions = TransactionService::new(stores.transactions, stores.categories);

    println!("Seeding demo user...");
    let Some(user) = seed_demo_user(&accounts).await else {
        println!("  Demo user already exists, skipping...");
        return;
    };

    let known = categories
        .list()
        .await
        .expect("Failed to list categories");

    let current = CycleMonth::from_date(Utc::now().date_naive());
    let previous = current
        .first_day()
        .pred_opt()
        .map_or(current, CycleMonth::from_date);

    for month in [previous, current] {
        println!("Seeding budgets for {month}...");
        seed_budgets(&budgets, &user, &known, month).await;

        println!("Seeding transactions for {month}...");
        seed_transactions(&transactions, &user, &known, month).await;
    }

    println!("Seeding complete! Log in as {DEMO_USERNAME} / {DEMO_PASSWORD}");
}

/// Registers the demo user; `None` if it already exists.
async fn seed_demo_user(accounts: &AccountService) -> Option<User> {
    let request = RegisterRequest {
        username: DEMO_USERNAME.to_string(),
        password: DEMO_PASSWORD.to_string(),
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
    };

    match accounts.register(request).await {
        Ok(user) => {
            println!("  Created demo user: {}", user.username);
            Some(user)
        }
        Err(AccountError::UsernameTaken(_)) => None,
        Err(e) => panic!("Failed to register demo user: {e}"),
    }
}

fn category_id(known: &[Category], name: &str) -> Option<CategoryId> {
    known.iter().find(|c| c.name == name).map(|c| c.id)
}

async fn seed_budgets(budgets: &BudgetService, user: &User, known: &[Category], month: CycleMonth) {
    let mut inserted = 0;
    for (name, amount) in BUDGETS {
        let Some(category_id) = category_id(known, name) else {
            eprintln!("  Unknown category {name}, skipping budget");
            continue;
        };

        let input = CreateBudgetInput {
            category_id: Some(category_id),
            cycle_month: Some(month.to_string()),
            budget_amount: Some(amount),
        };
        match budgets.create(user.id, input).await {
            Ok(_) => inserted += 1,
            Err(BudgetError::Duplicate { .. }) => {}
            Err(e) => eprintln!("Failed to insert budget: {e}"),
        }
    }
    println!("  Inserted {inserted} budgets");
}

async fn seed_transactions(
    transactions: &TransactionService,
    user: &User,
    known: &[Category],
    month: CycleMonth,
) {
    let today = Utc::now().date_naive();
    let mut inserted = 0;

    for (name, kind, amount, day, note) in MONTH_ACTIVITY {
        let Some(category_id) = category_id(known, name) else {
            eprintln!("  Unknown category {name}, skipping transaction");
            continue;
        };
        let Some(occurred_on) = day_of(month, day).filter(|d| *d <= today) else {
            continue;
        };

        let input = CreateTransactionInput {
            category_id: Some(category_id),
            kind: Some(kind),
            amount: Some(amount),
            note: Some(note.to_string()),
            occurred_on: Some(occurred_on),
        };
        match transactions.create(user.id, input).await {
            Ok(_) => inserted += 1,
            Err(e) => eprintln!("Failed to insert transaction: {e}"),
        }
    }
    println!("  Inserted {inserted} transactions");
}

fn day_of(month: CycleMonth, day: u32) -> Option<NaiveDate> {
    month.first_day().with_day(day)
}
