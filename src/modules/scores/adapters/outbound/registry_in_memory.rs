// In memory implementation of the ScoreRegistry port.
//
// Purpose
// - Hold every tracked event score for the lifetime of the process.
//
// Responsibilities
// - Store entries in insertion order with an index keyed by event id.
// - Guard the whole map with a single lock; creation and mutation take it for writing.
// - Hand out clones only, never references into the map.

use crate::modules::scores::core::event_score::EventScore;
use crate::modules::scores::core::ports::ScoreRegistry;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Default)]
struct Entries {
    index: HashMap<String, usize>,
    scores: Vec<EventScore>,
}

impl Entries {
    fn get(&self, event_id: &str) -> Option<&EventScore> {
        self.index
            .get(event_id)
            .and_then(|&position| self.scores.get(position))
    }

    fn get_or_insert(&mut self, event_id: &str) -> (EventScore, bool) {
        if let Some(existing) = self.get(event_id) {
            return (existing.clone(), false);
        }
        let created = EventScore::new(event_id);
        self.index.insert(event_id.to_string(), self.scores.len());
        self.scores.push(created.clone());
        (created, true)
    }
}

#[derive(Default)]
pub struct InMemoryScoreRegistry {
    inner: RwLock<Entries>,
}

impl InMemoryScoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreRegistry for InMemoryScoreRegistry {
    async fn get_or_create(&self, event_id: &str) -> EventScore {
        if let Some(existing) = self.inner.read().await.get(event_id) {
            return existing.clone();
        }

        // Re-checked under the write lock; another caller may have won the race.
        let (score, created) = self.inner.write().await.get_or_insert(event_id);
        if created {
            info!(event_id, "new event created");
        }
        score
    }

    async fn list_all(&self) -> Vec<EventScore> {
        self.inner.read().await.scores.clone()
    }

    async fn for_each(&self, mutation: &mut (dyn for<'e> FnMut(&'e mut EventScore) + Send)) {
        let mut guard = self.inner.write().await;
        for score in guard.scores.iter_mut() {
            mutation(score);
        }
    }

    async fn len(&self) -> usize {
        self.inner.read().await.scores.len()
    }
}
