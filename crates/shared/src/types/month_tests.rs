use super::*;
use rstest::rstest;

#[rstest]
#[case("2024-01", 2024, 1)]
#[case("1999-12", 1999, 12)]
#[case("0000-06", 0, 6)]
fn test_parse_valid(#[case] input: &str, #[case] year: i32, #[case] month: u32) {
    let parsed: CycleMonth = input.parse().unwrap();
    assert_eq!(parsed.year(), year);
    assert_eq!(parsed.month(), month);
    assert_eq!(parsed.to_string(), input);
}

#[rstest]
#[case("2024/03")]
#[case("2024-3")]
#[case("24-03")]
#[case("2024-03-01")]
#[case("")]
#[case(" 2024-03")]
#[case("abcd-ef")]
fn test_parse_rejects_bad_format(#[case] input: &str) {
    assert!(matches!(
        input.parse::<CycleMonth>(),
        Err(CycleMonthError::Format(_))
    ));
}

#[rstest]
#[case("2024-00")]
#[case("2024-13")]
fn test_parse_rejects_month_out_of_range(#[case] input: &str) {
    assert!(matches!(
        input.parse::<CycleMonth>(),
        Err(CycleMonthError::MonthOutOfRange(_))
    ));
}

#[test]
fn test_month_boundaries() {
    let feb: CycleMonth = "2024-02".parse().unwrap();
    assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

    let dec: CycleMonth = "2023-12".parse().unwrap();
    assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert_eq!(dec.next().to_string(), "2024-01");
}

#[test]
fn test_contains_and_from_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let month = CycleMonth::from_date(date);
    assert_eq!(month.to_string(), "2024-01");
    assert!(month.contains(date));
    assert!(!month.next().contains(date));
}

#[test]
fn test_ordering_follows_calendar() {
    let a: CycleMonth = "2023-12".parse().unwrap();
    let b: CycleMonth = "2024-01".parse().unwrap();
    assert!(a < b);
}

#[test]
fn test_months_of_year() {
    let months: Vec<String> = CycleMonth::months_of_year(2024)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "2024-01");
    assert_eq!(months[11], "2024-12");
}

#[test]
fn test_serde_as_string() {
    let month: CycleMonth = serde_json::from_str("\"2024-05\"").unwrap();
    assert_eq!(serde_json::to_string(&month).unwrap(), "\"2024-05\"");
    assert!(serde_json::from_str::<CycleMonth>("\"2024/05\"").is_err());
}
