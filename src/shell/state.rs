use crate::modules::scores::core::ports::ScoreRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ScoreRegistry>,
}
