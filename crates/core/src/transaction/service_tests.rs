use super::*;
use crate::category::{CategoryService, CreateCategoryInput};
use crate::store::MemoryStore;
use crate::transaction::TransactionKind;
use budgetbuddy_shared::types::CategoryId;
use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal_macros::dec;

const USER: UserId = UserId(1);

async fn setup() -> (TransactionService, CategoryId) {
    let store = Arc::new(MemoryStore::new());
    let category = CategoryService::new(store.clone())
        .create(CreateCategoryInput {
            name: Some("food".into()),
            icon: None,
        })
        .await
        .unwrap();
    (TransactionService::new(store.clone(), store), category.id)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(category_id: CategoryId, amount: Decimal, on: NaiveDate) -> CreateTransactionInput {
    CreateTransactionInput {
        category_id: Some(category_id),
        kind: Some(TransactionKind::Expense),
        amount: Some(amount),
        note: None,
        occurred_on: Some(on),
    }
}

#[tokio::test]
async fn test_create_and_get() {
    let (service, cat) = setup().await;

    let mut input = expense(cat, dec!(12.50), date(2024, 1, 5));
    input.note = Some("  lunch  ".into());
    let created = service.create(USER, input).await.unwrap();

    assert_eq!(created.amount, dec!(12.50));
    assert_eq!(created.note.as_deref(), Some("lunch"));
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(service.get(created.id, USER).await.unwrap(), created);
}

#[rstest]
#[case(dec!(0))]
#[case(dec!(-5))]
#[tokio::test]
async fn test_create_rejects_non_positive_amount(#[case] amount: Decimal) {
    let (service, cat) = setup().await;
    let result = service
        .create(USER, expense(cat, amount, date(2024, 1, 5)))
        .await;
    assert!(matches!(result, Err(TransactionError::NonPositiveAmount)));
}

#[tokio::test]
async fn test_create_rejects_sub_cent_amount() {
    let (service, cat) = setup().await;
    let result = service
        .create(USER, expense(cat, dec!(1.005), date(2024, 1, 5)))
        .await;
    assert!(matches!(result, Err(TransactionError::TooPrecise { max: 2 })));

    // Trailing zeros do not count.
    service
        .create(USER, expense(cat, dec!(1.500), date(2024, 1, 5)))
        .await
        .unwrap();
}

#[test]
fn test_max_amount_fits_twelve_digit_column() {
    assert_eq!(MAX_AMOUNT, dec!(9999999999.99));
}

#[rstest]
#[case(dec!(9999999999.99), true)]
#[case(dec!(10000000000), false)]
#[case(dec!(50000000000000000000000000000), false)]
#[tokio::test]
async fn test_create_caps_amount(#[case] amount: Decimal, #[case] accepted: bool) {
    let (service, cat) = setup().await;
    let result = service
        .create(USER, expense(cat, amount, date(2024, 1, 5)))
        .await;
    if accepted {
        assert_eq!(result.unwrap().amount, MAX_AMOUNT);
    } else {
        assert!(matches!(
            result,
            Err(TransactionError::AmountTooLarge { max }) if max == MAX_AMOUNT
        ));
    }
}

#[tokio::test]
async fn test_update_caps_amount() {
    let (service, cat) = setup().await;
    let created = service
        .create(USER, expense(cat, dec!(10), date(2024, 1, 5)))
        .await
        .unwrap();

    let result = service
        .update(
            created.id,
            USER,
            UpdateTransactionInput {
                amount: Some(dec!(10000000000)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(TransactionError::AmountTooLarge { .. })));
}

#[tokio::test]
async fn test_create_requires_fields() {
    let (service, cat) = setup().await;
    let mut input = expense(cat, dec!(1), date(2024, 1, 5));
    input.kind = None;

    let result = service.create(USER, input).await;
    assert!(matches!(result, Err(TransactionError::MissingField("kind"))));
}

#[tokio::test]
async fn test_create_rejects_long_note() {
    let (service, cat) = setup().await;
    let mut input = expense(cat, dec!(1), date(2024, 1, 5));
    input.note = Some("n".repeat(MAX_NOTE_LEN + 1));

    let result = service.create(USER, input).await;
    assert!(matches!(result, Err(TransactionError::NoteTooLong { .. })));
}

#[tokio::test]
async fn test_create_unknown_category() {
    let (service, _) = setup().await;
    let result = service
        .create(USER, expense(CategoryId(42), dec!(1), date(2024, 1, 5)))
        .await;
    assert!(matches!(
        result,
        Err(TransactionError::CategoryNotFound(CategoryId(42)))
    ));
}

#[tokio::test]
async fn test_other_users_transactions_are_not_found() {
    let (service, cat) = setup().await;
    let created = service
        .create(USER, expense(cat, dec!(5), date(2024, 1, 5)))
        .await
        .unwrap();

    let result = service.get(created.id, UserId(2)).await;
    assert!(matches!(result, Err(TransactionError::NotFound(_))));
    assert!(!service.delete(created.id, UserId(2)).await.unwrap());
}

#[tokio::test]
async fn test_list_filters_and_orders_newest_first() {
    let (service, cat) = setup().await;
    let first = service
        .create(USER, expense(cat, dec!(1), date(2024, 1, 5)))
        .await
        .unwrap();
    let second = service
        .create(USER, expense(cat, dec!(2), date(2024, 2, 5)))
        .await
        .unwrap();
    let income = service
        .create(
            USER,
            CreateTransactionInput {
                kind: Some(TransactionKind::Income),
                ..expense(cat, dec!(100), date(2024, 1, 31))
            },
        )
        .await
        .unwrap();

    let all = service
        .list(USER, TransactionFilter::default())
        .await
        .unwrap();
    let ids: Vec<_> = all.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![income.id, second.id, first.id]);

    let january = service
        .list(
            USER,
            TransactionFilter {
                kind: Some(TransactionKind::Expense),
                ..TransactionFilter::between(date(2024, 1, 1), date(2024, 1, 31))
            },
        )
        .await
        .unwrap();
    assert_eq!(january, vec![first]);
}

#[tokio::test]
async fn test_list_rejects_inverted_range() {
    let (service, _) = setup().await;
    let result = service
        .list(
            USER,
            TransactionFilter::between(date(2024, 2, 1), date(2024, 1, 1)),
        )
        .await;
    assert!(matches!(
        result,
        Err(TransactionError::InvalidDateRange { .. })
    ));
}

#[tokio::test]
async fn test_update_changes_fields_and_touches_timestamp() {
    let (service, cat) = setup().await;
    let mut input = expense(cat, dec!(10), date(2024, 1, 5));
    input.note = Some("coffee".into());
    let created = service.create(USER, input).await.unwrap();

    let updated = service
        .update(
            created.id,
            USER,
            UpdateTransactionInput {
                amount: Some(dec!(11)),
                note: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.amount, dec!(11));
    assert_eq!(updated.note, None);
    assert_eq!(updated.occurred_on, created.occurred_on);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_validates_patch() {
    let (service, cat) = setup().await;
    let created = service
        .create(USER, expense(cat, dec!(10), date(2024, 1, 5)))
        .await
        .unwrap();

    let result = service
        .update(
            created.id,
            USER,
            UpdateTransactionInput {
                amount: Some(dec!(0)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(TransactionError::NonPositiveAmount)));

    let result = service
        .update(
            TransactionId(999),
            USER,
            UpdateTransactionInput::default(),
        )
        .await;
    assert!(matches!(result, Err(TransactionError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (service, cat) = setup().await;
    let created = service
        .create(USER, expense(cat, dec!(10), date(2024, 1, 5)))
        .await
        .unwrap();

    assert!(service.delete(created.id, USER).await.unwrap());
    assert!(!service.delete(created.id, USER).await.unwrap());
    assert!(matches!(
        service.get(created.id, USER).await,
        Err(TransactionError::NotFound(_))
    ));
}
