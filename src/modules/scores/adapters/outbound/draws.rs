// DrawSource implementations.
//
// - RandomDraws: uniform draws from a StdRng, seeded from the OS or from a fixed seed.
// - ScriptedDraws: a fixed sequence of draws, for forcing exact outcomes.

use crate::modules::scores::core::ports::DrawSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub struct RandomDraws {
    rng: StdRng,
}

impl RandomDraws {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DrawSource for RandomDraws {
    fn next_draw(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays the given draws in order. Once exhausted every draw is
/// [`ScriptedDraws::NO_GOAL`], so scores stay where the script left them.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
}

impl ScriptedDraws {
    pub const NO_GOAL: f64 = 0.99;

    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn push(&mut self, draw: f64) {
        self.draws.push_back(draw);
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn next_draw(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(Self::NO_GOAL)
    }
}
