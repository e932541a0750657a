// Ports define what the scores core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the score registry and the source of random draws as traits.
//
// Boundaries
// - No concrete storage or randomness here. Adapters implement these traits.
//
// Testing guidance
// - The in memory registry is the production implementation as well as the test one.
// - Use scripted draws to force exact scoring outcomes.

use crate::modules::scores::core::event_score::EventScore;
use async_trait::async_trait;

/// Sole owner of all event scores.
///
/// Every operation is total. Implementations must serialize mutations so that
/// no increment is ever lost and readers never see a half-applied update.
#[async_trait]
pub trait ScoreRegistry: Send + Sync {
    /// Returns the entry for `event_id`, creating it at 0:0 if it does not exist yet.
    /// Concurrent callers with the same id observe a single entry.
    async fn get_or_create(&self, event_id: &str) -> EventScore;

    /// Consistent snapshot of every entry.
    async fn list_all(&self) -> Vec<EventScore>;

    /// Applies `mutation` to every current entry exactly once.
    async fn for_each(&self, mutation: &mut (dyn for<'e> FnMut(&'e mut EventScore) + Send));

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Supplier of uniform draws in [0, 1).
pub trait DrawSource: Send {
    fn next_draw(&mut self) -> f64;
}
