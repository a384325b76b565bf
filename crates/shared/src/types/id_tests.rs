use super::*;
use std::str::FromStr;

#[test]
fn test_typed_id_roundtrip() {
    let id = UserId::new(42);
    assert_eq!(id.into_inner(), 42);
    assert_eq!(UserId::from(42), id);
}

#[test]
fn test_typed_id_validity() {
    assert!(BudgetId::new(1).is_valid());
    assert!(!BudgetId::new(0).is_valid());
    assert!(!BudgetId::new(-3).is_valid());
}

#[test]
fn test_typed_id_display() {
    assert_eq!(format!("{}", CategoryId::new(7)), "7");
}

#[test]
fn test_typed_id_from_str() {
    let id = TransactionId::from_str("15").unwrap();
    assert_eq!(id.into_inner(), 15);
}

#[test]
fn test_typed_id_from_str_error() {
    assert!(UserId::from_str("invalid").is_err());
}

#[test]
fn test_typed_id_serializes_transparently() {
    let json = serde_json::to_string(&BudgetId::new(9)).unwrap();
    assert_eq!(json, "9");
    let back: BudgetId = serde_json::from_str("9").unwrap();
    assert_eq!(back, BudgetId::new(9));
}
