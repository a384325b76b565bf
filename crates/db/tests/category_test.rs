//! Integration tests for Category repository and the default-category seed.

mod common;

use budgetbuddy_core::StoreError;
use budgetbuddy_core::category::{CategoryStore, DEFAULT_CATEGORIES, NewCategory};
use budgetbuddy_core::transaction::{NewTransaction, TransactionKind, TransactionStore};
use budgetbuddy_db::{CategoryRepository, TransactionRepository};
use budgetbuddy_shared::types::CategoryId;
use chrono::NaiveDate;
use common::{FOOD, TRANSPORT, create_user, setup_db};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_default_categories_are_seeded() {
    let db = setup_db().await;
    let repo = CategoryRepository::new(db);

    let categories = repo.list().await.unwrap();
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    let expected: Vec<_> = DEFAULT_CATEGORIES.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, expected);
    assert_eq!(categories[0].id, FOOD);
    assert_eq!(categories[0].icon.as_deref(), Some("utensils"));
}

#[tokio::test]
async fn test_find_by_name_ignores_case() {
    let db = setup_db().await;
    let repo = CategoryRepository::new(db);

    let found = repo.find_by_name("FoOd").await.unwrap().expect("seeded");
    assert_eq!(found.id, FOOD);
    assert!(repo.find_by_name("groceries").await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_and_duplicate() {
    let db = setup_db().await;
    let repo = CategoryRepository::new(db);

    let created = repo
        .insert(NewCategory {
            name: "pets".to_string(),
            icon: None,
        })
        .await
        .unwrap();
    assert_eq!(created.name, "pets");
    assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created));

    let duplicate = repo
        .insert(NewCategory {
            name: "pets".to_string(),
            icon: Some("paw".to_string()),
        })
        .await;
    assert!(matches!(duplicate, Err(StoreError::UniqueViolation(_))));
}

#[tokio::test]
async fn test_references_and_delete() {
    let db = setup_db().await;
    let repo = CategoryRepository::new(db.clone());
    let user = create_user(&db, "ada").await;

    assert!(!repo.is_referenced(FOOD).await.unwrap());
    TransactionRepository::new(db.clone())
        .insert(NewTransaction {
            user_id: user.id,
            category_id: FOOD,
            kind: TransactionKind::Expense,
            amount: dec!(12.5),
            note: None,
            occurred_on: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        })
        .await
        .unwrap();
    assert!(repo.is_referenced(FOOD).await.unwrap());

    assert!(repo.delete(TRANSPORT).await.unwrap());
    assert!(repo.find_by_id(TRANSPORT).await.unwrap().is_none());
    assert!(!repo.delete(TRANSPORT).await.unwrap());
}

#[tokio::test]
async fn test_delete_referenced_category_violates_foreign_key() {
    let db = setup_db().await;
    let repo = CategoryRepository::new(db.clone());
    let user = create_user(&db, "grace").await;

    TransactionRepository::new(db.clone())
        .insert(NewTransaction {
            user_id: user.id,
            category_id: FOOD,
            kind: TransactionKind::Expense,
            amount: dec!(4),
            note: None,
            occurred_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        })
        .await
        .unwrap();

    let result = repo.delete(FOOD).await;
    assert!(matches!(result, Err(StoreError::ReferenceViolation(_))));
    assert!(repo.find_by_id(FOOD).await.unwrap().is_some());
}

#[tokio::test]
async fn test_insert_for_missing_category_violates_foreign_key() {
    let db = setup_db().await;
    let user = create_user(&db, "linus").await;

    let result = TransactionRepository::new(db)
        .insert(NewTransaction {
            user_id: user.id,
            category_id: CategoryId(999),
            kind: TransactionKind::Expense,
            amount: dec!(4),
            note: None,
            occurred_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        })
        .await;
    assert!(matches!(result, Err(StoreError::ReferenceViolation(_))));
}
