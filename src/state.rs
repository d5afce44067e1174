use std::sync::Arc;

use crate::store::VisitStore;

// app's shared state - all counter state lives in the store, nothing in process
pub struct AppState {
    pub store: Arc<dyn VisitStore>,
}
