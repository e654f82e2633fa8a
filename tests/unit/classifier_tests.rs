//! Unit tests for name-pattern classification

use chrono::NaiveDate;

use instant_sql_vars::synth::{classify_variable, SqlDataType};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_rule_order() {
    let today = day(2024, 6, 30);
    let cases = [
        ("@productCode", SqlDataType::VarcharMax, "'myValue'"),
        ("@CONTACTINFO", SqlDataType::VarcharMax, "'myValue'"),
        ("@firstname", SqlDataType::VarcharMax, "'myValue'"),
        ("@axisLabel", SqlDataType::VarcharMax, "'myValue'"),
        ("@shipDate", SqlDataType::DateTime, "'6/30/2024'"),
        ("@modifiedDt", SqlDataType::DateTime, "'6/30/2024'"),
        ("@isDeleted", SqlDataType::Bit, "'true'"),
        ("@ISDELETED", SqlDataType::Bit, "'true'"),
        ("@isName", SqlDataType::VarcharMax, "'myValue'"),
        ("@isDt", SqlDataType::DateTime, "'6/30/2024'"),
        ("@pageSize", SqlDataType::Int, "1"),
        ("@island", SqlDataType::Bit, "'true'"),
    ];
    for (name, data_type, placeholder) in cases {
        let c = classify_variable(name, today);
        assert_eq!(c.data_type, data_type, "type for {name}");
        assert_eq!(c.placeholder, placeholder, "placeholder for {name}");
    }
}

#[test]
fn test_date_has_no_zero_padding() {
    let c = classify_variable("@dueDate", day(2023, 1, 9));
    assert_eq!(c.placeholder, "'1/9/2023'");
    let c = classify_variable("@dueDate", day(2023, 12, 25));
    assert_eq!(c.placeholder, "'12/25/2023'");
}

#[test]
fn test_classification_is_repeatable() {
    let today = day(2024, 2, 29);
    for name in ["@a", "@isX", "@xDate", "@xCode"] {
        assert_eq!(classify_variable(name, today), classify_variable(name, today));
    }
}

#[test]
fn test_data_type_display() {
    assert_eq!(SqlDataType::VarcharMax.to_string(), "VARCHAR(MAX)");
    assert_eq!(SqlDataType::DateTime.to_string(), "DATETIME");
    assert_eq!(SqlDataType::Bit.to_string(), "BIT");
    assert_eq!(SqlDataType::Int.to_string(), "INT");
}
