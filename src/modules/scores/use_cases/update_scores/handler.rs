// Score updater: one tick applies an independent scoring decision to every registered event.
//
// Responsibilities
// - Draw once per entry, decide the outcome, apply it in place through the registry.
// - Log every goal at info level, and the no-goal rounds at debug level.
// - Report how many entries were visited and how many goals were scored.
//
// Scheduling lives in the shell (see shell::workers). A tick here can be forced directly.

use crate::modules::scores::core::event_score::EventScore;
use crate::modules::scores::core::ports::{DrawSource, ScoreRegistry};
use crate::modules::scores::core::scoring::{GoalOutcome, decide_goal};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub visited: usize,
    pub goals: usize,
}

pub struct ScoreUpdater<TRegistry, TDraws>
where
    TRegistry: ScoreRegistry + ?Sized,
    TDraws: DrawSource,
{
    registry: Arc<TRegistry>,
    draws: TDraws,
}

impl<TRegistry, TDraws> ScoreUpdater<TRegistry, TDraws>
where
    TRegistry: ScoreRegistry + ?Sized,
    TDraws: DrawSource,
{
    pub fn new(registry: Arc<TRegistry>, draws: TDraws) -> Self {
        Self { registry, draws }
    }

    pub async fn tick(&mut self) -> TickReport {
        let draws = &mut self.draws;
        let mut report = TickReport::default();

        self.registry
            .for_each(&mut |event: &mut EventScore| {
                report.visited += 1;
                let outcome = decide_goal(draws.next_draw());
                event.apply(outcome);
                match outcome {
                    GoalOutcome::Scored(side) => {
                        report.goals += 1;
                        info!(
                            event_id = %event.event_id,
                            %side,
                            score = %event.current_score,
                            "goal scored"
                        );
                    }
                    GoalOutcome::NoGoal => debug!(
                        event_id = %event.event_id,
                        score = %event.current_score,
                        "no goals this round"
                    ),
                }
            })
            .await;

        debug!(visited = report.visited, goals = report.goals, "score tick complete");
        report
    }
}
