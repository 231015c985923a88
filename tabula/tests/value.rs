use chrono::{NaiveDate, NaiveTime};
use tabula::value::CellValue;

#[test]
fn test_default_text_forms() {
    assert_eq!(CellValue::Null.to_string(), "");
    assert_eq!(CellValue::from(true).to_string(), "true");
    assert_eq!(CellValue::from(-7i32).to_string(), "-7");
    assert_eq!(CellValue::from(2.5).to_string(), "2.5");
    assert_eq!(CellValue::from(3.0).to_string(), "3");
    assert_eq!(
        CellValue::from(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()).to_string(),
        "2023-12-01"
    );
    assert_eq!(
        CellValue::from(NaiveTime::from_hms_opt(8, 5, 0).unwrap()).to_string(),
        "08:05"
    );
}

#[test]
fn test_option_conversion() {
    assert!(CellValue::from(None::<i64>).is_null());
    assert_eq!(CellValue::from(Some("x")), CellValue::from("x"));
}

#[test]
fn test_numeric_view() {
    assert_eq!(CellValue::from(4i64).as_f64(), Some(4.0));
    assert_eq!(CellValue::from("4").as_f64(), None);
    assert_eq!(CellValue::from("4").as_str(), Some("4"));
    assert_eq!(CellValue::from(4i64).type_name(), "int");
}

#[test]
fn test_tagged_deserialize() {
    let json = r#"[
        {"type": "null"},
        {"type": "bool", "value": true},
        {"type": "int", "value": 3},
        {"type": "float", "value": 1.5},
        {"type": "date", "value": "2024-02-29"},
        {"type": "time", "value": "10:15:00"},
        {"type": "text", "value": "plain"}
    ]"#;
    let values: Vec<CellValue> = serde_json::from_str(json).unwrap();

    assert_eq!(
        values,
        [
            CellValue::Null,
            CellValue::Bool(true),
            CellValue::Int(3),
            CellValue::Float(1.5),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            CellValue::Time(NaiveTime::from_hms_opt(10, 15, 0).unwrap()),
            CellValue::Text("plain".to_string()),
        ]
    );
}

#[test]
fn test_date_like_text_keeps_variant() {
    for text in ["2024-01-01", "10:15:00", "42", "true"] {
        let value = CellValue::from(text);
        let json = serde_json::to_string(&value).unwrap();
        let back: CellValue = serde_json::from_str(&json).unwrap();

        assert_eq!(back, value, "{json}");
    }
}

#[test]
fn test_integer_keeps_variant() {
    let value = CellValue::Int(9_007_199_254_740_993);
    let json = serde_json::to_string(&value).unwrap();

    assert_eq!(json, r#"{"type":"int","value":9007199254740993}"#);
    assert_eq!(serde_json::from_str::<CellValue>(&json).unwrap(), value);
}
