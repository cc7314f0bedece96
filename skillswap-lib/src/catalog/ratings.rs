//! The in-memory skill rating accumulator.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::catalog::records::{Rating, RatingKind, UserId};

/// Append-only store of rating submissions, kept for the lifetime of the
/// process.
///
/// Cloning hands out another handle to the same store. A single writer lock
/// guards the sequence; submissions from concurrent requests serialize on it.
#[derive(Debug, Clone, Default)]
pub struct RatingStore {
    ratings: Arc<RwLock<Vec<Rating>>>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score for a skill. Scores outside 1..=5 are dropped with a
    /// diagnostic; submission is best-effort and never fails.
    ///
    /// There is no uniqueness constraint: repeat submissions from the same
    /// user all count towards the average.
    pub fn submit(&self, user_id: impl Into<UserId>, skill: &str, score: u8, kind: RatingKind) {
        if !(1..=5).contains(&score) {
            warn!(score, skill, "Rating must be between 1 and 5; ignoring");
            return;
        }

        self.ratings
            .write()
            .push(Rating::new(user_id.into(), skill, score, kind));

        debug!(score, skill, %kind, "Recorded rating");
    }

    /// Arithmetic mean of all scores submitted for `(skill, kind)`, both
    /// matched exactly. `None` when nothing has been submitted, which is
    /// distinct from any reachable average.
    pub fn average(&self, skill: &str, kind: RatingKind) -> Option<f64> {
        let ratings = self.ratings.read();

        let mut sum = 0.0;
        let mut count = 0u32;
        for rating in ratings
            .iter()
            .filter(|r| r.skill() == skill && r.kind() == kind)
        {
            sum += f64::from(rating.score());
            count += 1;
        }

        (count > 0).then(|| sum / f64::from(count))
    }

    /// Number of stored ratings, across all skills and kinds.
    pub fn len(&self) -> usize {
        self.ratings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.read().is_empty()
    }
}
