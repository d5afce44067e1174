use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref VISIT_TOTAL: Counter =
        register_counter!("visit_requests_total", "Total number of counted requests").unwrap();
    pub static ref STORAGE_ERRORS: Counter =
        register_counter!("visit_storage_errors_total", "Total storage failures").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "visit_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}
