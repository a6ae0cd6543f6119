use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

// Prometheus metrics (default registry)
pub static OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "student_directory_operations_total",
        "Total student directory operations handled",
        &["operation"]
    )
    .expect("register operations_total")
});

pub static ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "student_directory_errors_total",
        "Total failed student directory operations",
        &["operation", "kind"]
    )
    .expect("register errors_total")
});

/// Count one operation and, on failure, its error kind.
pub fn record<T>(operation: &str, res: &Result<T, ServiceError>) {
    OPERATIONS_TOTAL.with_label_values(&[operation]).inc();
    if let Err(e) = res {
        ERRORS_TOTAL.with_label_values(&[operation, e.kind()]).inc();
    }
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_errors_by_kind() {
        let before = ERRORS_TOTAL.with_label_values(&["metrics_test", "not_found"]).get();
        record::<()>("metrics_test", &Err(ServiceError::not_found("student", 1)));
        record("metrics_test", &Ok::<_, ServiceError>(()));
        assert_eq!(OPERATIONS_TOTAL.with_label_values(&["metrics_test"]).get(), 2);
        assert_eq!(ERRORS_TOTAL.with_label_values(&["metrics_test", "not_found"]).get(), before + 1);

        let (status, text) = encode_metrics();
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(text.contains("student_directory_operations_total"));
    }
}
