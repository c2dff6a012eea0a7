use namerank_core::Scorer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<Scorer>,
}

impl AppState {
    pub fn new(scorer: Scorer) -> Self {
        Self {
            scorer: Arc::new(scorer),
        }
    }
}
