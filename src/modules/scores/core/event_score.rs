// Event score record kept per tracked match.
//
// Purpose
// - Represent one match and its running score.
//
// Responsibilities
// - Hold left and right goal counts as integers, starting at 0:0.
// - Only ever move a count up by one.
// - Render the score as "left:right" on the wire.

use crate::modules::scores::core::scoring::{GoalOutcome, Side};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    left: u32,
    right: u32,
}

impl Score {
    pub const fn left(&self) -> u32 {
        self.left
    }

    pub const fn right(&self) -> u32 {
        self.right
    }

    pub fn score_goal(&mut self, side: Side) {
        let current = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        let Some(next) = current.checked_add(1) else {
            error!(%side, score = %self, "goal count overflow, score left unchanged");
            return;
        };
        match side {
            Side::Left => self.left = next,
            Side::Right => self.right = next,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.left, self.right)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventScore {
    pub event_id: String,
    pub current_score: Score,
}

impl EventScore {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            current_score: Score::default(),
        }
    }

    pub fn apply(&mut self, outcome: GoalOutcome) {
        if let GoalOutcome::Scored(side) = outcome {
            self.current_score.score_goal(side);
        }
    }
}
