use axum::{Json, extract::State};

use crate::modules::scores::core::event_score::EventScore;
use crate::shell::state::AppState;

// Operational inspection only. No pagination, filtering or ordering guarantee.
pub async fn handle(State(state): State<AppState>) -> Json<Vec<EventScore>> {
    Json(state.registry.list_all().await)
}
