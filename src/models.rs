use serde::Serialize;
use sqlx::prelude::FromRow;

// One row of the visits table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VisitRecord {
    pub url: String,
    pub visit_count: i64,
}
