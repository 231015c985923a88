use std::fmt;

use chrono::NaiveDate;
use tabula::prelude::*;

#[derive(Debug)]
struct BrokenFormatter;

impl fmt::Display for BrokenFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("lookup table missing")
    }
}

impl std::error::Error for BrokenFormatter {}

// ============================================================================
// Type-level formatting
// ============================================================================

#[test]
fn test_type_formatting_uses_number_format() {
    let column = Column::new("Salary", "salary", NumberType::new());
    assert_eq!(column.formatted_value_for_type(&CellValue::from(1234567i64)), "1,234,567");
}

#[test]
fn test_type_formatting_stringifies_other_types() {
    let column = Column::new("Name", "name", TextType::new());
    assert_eq!(column.formatted_value_for_type(&CellValue::from(1234567i64)), "1234567");

    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let column = Column::new("Joined", "joined", DateType::new().format("%d/%m/%Y"));
    assert_eq!(column.formatted_value_for_type(&CellValue::from(date)), "2024-03-09");
}

// ============================================================================
// Display formatting
// ============================================================================

#[test]
fn test_display_without_formatter_falls_back_to_type() {
    let column = Column::new("Salary", "salary", NumberType::new());
    assert!(!column.has_formatter());
    assert_eq!(
        column.formatted_value_for_display(&CellValue::from(9876i64)).unwrap(),
        "9,876"
    );
}

#[test]
fn test_display_formatter_wins_over_number_format() {
    let column = Column::new("Salary", "salary", NumberType::new())
        .formatter(|value| format!("{value} USD"));

    assert_eq!(
        column.formatted_value_for_display(&CellValue::from(1234567i64)).unwrap(),
        "1234567 USD"
    );
}

#[test]
fn test_display_formatter_error_propagates() {
    let column = Column::new("Code", "code", TextType::new())
        .try_formatter(|_| Err(BrokenFormatter.into()));

    let err = column
        .formatted_value_for_display(&CellValue::from("A1"))
        .unwrap_err();

    match &err {
        ColumnError::Formatter { field, source } => {
            assert_eq!(field, "code");
            assert_eq!(source.to_string(), "lookup table missing");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("'code'"));
}

// ============================================================================
// Editing-mode formatting
// ============================================================================

fn upper(value: &CellValue) -> String {
    value.to_string().to_uppercase()
}

#[test]
fn test_editing_read_only_text_column_applies_formatter() {
    let column = Column::new("Code", "code", TextType::new())
        .read_only(true)
        .formatter(upper)
        .apply_formatter_in_editing(true);

    let value = CellValue::from("ab-12");
    assert_eq!(column.formatted_value_for_display_in_editing(&value).unwrap(), "AB-12");
}

#[test]
fn test_editing_writable_text_column_shows_raw_value() {
    let column = Column::new("Code", "code", TextType::new())
        .formatter(upper)
        .apply_formatter_in_editing(true);

    let value = CellValue::from("ab-12");
    assert_eq!(column.formatted_value_for_display_in_editing(&value).unwrap(), "ab-12");
    assert_eq!(column.formatted_value_for_display(&value).unwrap(), "AB-12");
}

#[test]
fn test_editing_picker_types_apply_formatter() {
    let types: Vec<Box<dyn Fn() -> Column>> = vec![
        Box::new(|| Column::new("Level", "level", SelectType::new(["low", "high"]))),
        Box::new(|| Column::new("Day", "day", DateType::new())),
        Box::new(|| Column::new("At", "at", TimeType::new())),
    ];

    for make in types {
        let column = make().formatter(|_| "formatted").apply_formatter_in_editing(true);
        assert_eq!(
            column
                .formatted_value_for_display_in_editing(&CellValue::from("low"))
                .unwrap(),
            "formatted",
            "column {}",
            column.field
        );
    }
}

#[test]
fn test_editing_requires_apply_flag() {
    let column = Column::new("Level", "level", SelectType::new(["low", "high"]))
        .read_only(true)
        .formatter(upper);

    assert_eq!(
        column
            .formatted_value_for_display_in_editing(&CellValue::from("low"))
            .unwrap(),
        "low"
    );
}

#[test]
fn test_editing_number_column_shows_unformatted_number() {
    let column = Column::new("Salary", "salary", NumberType::new()).apply_formatter_in_editing(true);

    assert_eq!(
        column
            .formatted_value_for_display_in_editing(&CellValue::from(1234567i64))
            .unwrap(),
        "1234567"
    );
}

#[test]
fn test_formatted_value_picks_mode() {
    let column = Column::new("Code", "code", TextType::new()).formatter(upper);
    let value = CellValue::from("x");

    assert_eq!(column.formatted_value(&value, false).unwrap(), "X");
    assert_eq!(column.formatted_value(&value, true).unwrap(), "x");
}
