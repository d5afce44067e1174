mod health;
mod metrics;
mod visit;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use visit::visit_handler;
