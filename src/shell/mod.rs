// Composition root for the scores service.
//
// Responsibilities
// - Read config from environment (see config).
// - Instantiate the in memory registry and the draw source.
// - Wire the registry into the HTTP router.
// - Spawn the score updater worker.

pub mod config;
pub mod http;
pub mod state;
pub mod workers;

use crate::modules::scores::adapters::outbound::draws::RandomDraws;
use crate::modules::scores::adapters::outbound::registry_in_memory::InMemoryScoreRegistry;
use crate::modules::scores::use_cases::update_scores::handler::ScoreUpdater;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::shell::workers::{WorkerHandle, spawn_score_updater};
use axum::Router;
use std::sync::Arc;

pub struct App {
    pub router: Router,
    pub updater: WorkerHandle,
}

/// Builds the service from `config`. Must be called inside a tokio runtime,
/// since the score updater is spawned right away.
pub fn build(config: &AppConfig) -> App {
    let registry = Arc::new(InMemoryScoreRegistry::new());
    let draws = match config.seed {
        Some(seed) => RandomDraws::seeded(seed),
        None => RandomDraws::from_os_rng(),
    };

    let updater = spawn_score_updater(
        ScoreUpdater::new(registry.clone(), draws),
        config.update_interval,
    );
    let router = router(AppState { registry });

    App { router, updater }
}
