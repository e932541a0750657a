use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::scores::use_cases::get_score::inbound::http as get_score_http;
use crate::modules::scores::use_cases::list_scores::inbound::http as list_scores_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/debug/all", get(list_scores_http::handle))
        .route("/{event_id}/score", get(get_score_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
