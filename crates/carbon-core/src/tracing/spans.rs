//! Span definitions per operation: report, recommendations, mutation.
//!
//! Each span carries its window or target via the `tracing` crate.

/// Create a report span for a date window.
#[macro_export]
macro_rules! report_span {
    ($start:expr, $end:expr) => {
        ::tracing::info_span!("carbon.report", window_start = %$start, window_end = %$end)
    };
}

/// Create a recommendations span.
#[macro_export]
macro_rules! recommendations_span {
    () => {
        ::tracing::info_span!("carbon.recommendations")
    };
}

/// Create a mutation span for an authenticated write.
#[macro_export]
macro_rules! mutation_span {
    ($operation:expr, $user:expr) => {
        ::tracing::info_span!("carbon.mutation", operation = $operation, user = %$user)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const REPORT: &str = "carbon.report";
    pub const RECOMMENDATIONS: &str = "carbon.recommendations";
    pub const MUTATION: &str = "carbon.mutation";
}
