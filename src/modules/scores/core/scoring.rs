// Pure scoring rule applied once per entry per tick.
//
// Responsibilities
// - Map a uniform draw in [0, 1) to a goal for the left side, the right side, or no goal.
// - Never perform input or output.

use std::fmt;

/// Draws below this value give the left side a goal.
pub const LEFT_SCORES_BELOW: f64 = 0.45;
/// Draws below this value, and not below [`LEFT_SCORES_BELOW`], give the right side a goal.
pub const RIGHT_SCORES_BELOW: f64 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalOutcome {
    Scored(Side),
    NoGoal,
}

pub fn decide_goal(draw: f64) -> GoalOutcome {
    debug_assert!(
        (0.0..1.0).contains(&draw),
        "draw {draw} is outside [0, 1)"
    );
    if draw < LEFT_SCORES_BELOW {
        GoalOutcome::Scored(Side::Left)
    } else if draw < RIGHT_SCORES_BELOW {
        GoalOutcome::Scored(Side::Right)
    } else {
        GoalOutcome::NoGoal
    }
}
