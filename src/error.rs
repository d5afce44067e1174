use thiserror::Error;

// Everything the storage layer can fail with. There is no retry policy:
// a request either completes or surfaces one of these.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no visit record for {0} after upsert")]
    MissingRecord(String),
}
