// Background workers spawned by the composition root.
//
// - Score updater: ticks the ScoreUpdater on a fixed interval until shut down.

use crate::modules::scores::core::ports::{DrawSource, ScoreRegistry};
use crate::modules::scores::use_cases::update_scores::handler::ScoreUpdater;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::info;

/// Handle to a spawned worker. Dropping it also stops the worker.
pub struct WorkerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    pub async fn shutdown(self) -> Result<(), JoinError> {
        // Fails only when the worker has already exited.
        let _ = self.shutdown.send(true);
        self.task.await
    }
}

/// Runs `updater.tick()` every `every`, the first tick one full period after spawning.
/// A tick that falls behind delays the following ones instead of bursting.
pub fn spawn_score_updater<TRegistry, TDraws>(
    mut updater: ScoreUpdater<TRegistry, TDraws>,
    every: Duration,
) -> WorkerHandle
where
    TRegistry: ScoreRegistry + ?Sized + 'static,
    TDraws: DrawSource + 'static,
{
    let (shutdown, mut stop) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval = ?every, "score updater started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    updater.tick().await;
                }
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
            }
        }

        info!("score updater stopped");
    });

    WorkerHandle { shutdown, task }
}
