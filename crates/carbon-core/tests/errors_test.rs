//! Tests for the error taxonomy and error codes.

use carbon_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let errors: Vec<Box<dyn Fn() -> &'static str>> = vec![
        Box::new(|| ConfigError::FileNotFound { path: "/tmp".into() }.error_code()),
        Box::new(|| StorageError::Sqlite { message: "x".into() }.error_code()),
        Box::new(|| InputError::missing("date").error_code()),
        Box::new(|| AuthError::Unauthenticated.error_code()),
    ];
    for code in errors {
        assert!(!code().is_empty());
    }
}

#[test]
fn store_unavailable_is_distinct_from_query_failure() {
    let down = StorageError::Unavailable {
        message: "unable to open database file".into(),
    };
    let failed = StorageError::Sqlite {
        message: "no such table".into(),
    };
    assert!(down.is_unavailable());
    assert!(!failed.is_unavailable());
    assert_eq!(down.error_code(), error_code::STORE_UNAVAILABLE);
    assert_eq!(failed.error_code(), error_code::STORAGE_ERROR);
}

#[test]
fn invalid_date_range_has_its_own_code() {
    let err = InputError::InvalidDateRange {
        message: "start date \"2025-13-01\" is not a YYYY-MM-DD calendar date".into(),
    };
    assert_eq!(err.error_code(), error_code::INVALID_DATE_RANGE);
    assert_eq!(InputError::missing("date").error_code(), error_code::INVALID_INPUT);
}

#[test]
fn top_level_error_keeps_subsystem_code() {
    let err: CarbonError = StorageError::Unavailable {
        message: "locked".into(),
    }
    .into();
    assert!(matches!(err, CarbonError::Storage(_)));
    assert_eq!(err.error_code(), error_code::STORE_UNAVAILABLE);

    let err: CarbonError = AuthError::TokenExpired.into();
    assert_eq!(err.coded_string(), "[TOKEN_EXPIRED] Auth error: Token expired");
}

#[test]
fn coded_string_format() {
    let err = InputError::NegativeCount {
        field: "student_count".into(),
        value: -5,
    };
    assert_eq!(
        err.coded_string(),
        "[INVALID_INPUT] student_count must be non-negative, got -5"
    );
}

#[test]
fn row_errors_carry_their_cause() {
    let err = InputError::InvalidRow {
        row: 3,
        source: Box::new(InputError::invalid("raw_value", "must be a finite number")),
    };
    assert!(err.to_string().contains("row 3"));
    assert!(std::error::Error::source(&err).is_some());
}
