//! The catalog: tables, ratings, and the operations over them.

use std::{
    collections::BTreeSet,
    fmt::{self, Debug, Formatter},
    path::Path,
    sync::Arc,
};

use derive_more::Deref;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    Result,
    notify::{self, Notifier, TracingNotifier},
};

pub mod dataset;
pub mod filter;
pub mod ratings;
pub mod records;
pub mod registration;

mod summary;

pub use dataset::{Dataset, LoadError};
pub use filter::ProfileQuery;
pub use ratings::RatingStore;
pub use records::{Category, Profile, Rating, RatingKind, Skill, Summary, User, UserId};
pub use registration::{InterestMatch, MatchDirection};
pub use summary::JoinError;

/// Cloneable handle to the in-memory source tables.
///
/// A single writer lock guards all four tables; registration takes the write
/// side, everything else reads.
#[derive(Debug, Clone, Default, Deref)]
pub(crate) struct Tables {
    #[deref]
    tables: Arc<RwLock<TableSet>>,
}

#[derive(Debug, Default)]
pub(crate) struct TableSet {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub skills: Vec<Skill>,
    pub categories: Vec<Category>,
}

impl Tables {
    fn from_dataset(dataset: Dataset) -> Self {
        Self {
            tables: Arc::new(RwLock::new(TableSet {
                users: dataset.users,
                profiles: dataset.profiles,
                skills: dataset.skills,
                categories: dataset.categories,
            })),
        }
    }
}

/// Central access point for matching, rating, and registration.
///
/// Owns the source tables, the rating store, and the notification channel.
/// Cloning produces another handle to the same state, so one catalog can be
/// shared across request handlers.
#[derive(Clone)]
pub struct Catalog {
    tables: Tables,
    ratings: RatingStore,
    notifier: Arc<dyn Notifier>,
}

impl Catalog {
    /// Load the dataset at `path` and build a catalog around it, logging
    /// notifications through the default [`TracingNotifier`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_dataset(Dataset::load(path)?))
    }

    /// Build a catalog from already-parsed tables.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            tables: Tables::from_dataset(dataset),
            ratings: RatingStore::new(),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the notification channel.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The read path: filter the profile table, then join every hit with its
    /// owning user.
    pub fn recommend(&self, query: &ProfileQuery) -> Result<Vec<Summary>> {
        let tables = self.tables.read();
        let matched = filter::filter_profiles(&tables.profiles, query);

        Ok(summary::summarize(&tables.users, &matched)?)
    }

    /// The skill reference table, as loaded. Not consulted by the matcher.
    pub fn skills(&self) -> Vec<Skill> {
        self.tables.read().skills.clone()
    }

    /// The category reference table, as loaded. Not consulted by the matcher.
    pub fn categories(&self) -> Vec<Category> {
        self.tables.read().categories.clone()
    }

    /// Distinct skills offered across all profiles, sorted.
    pub fn offered_skills(&self) -> Vec<String> {
        let tables = self.tables.read();
        let skills: BTreeSet<String> = tables
            .profiles
            .iter()
            .flat_map(|p| p.offered_skills().iter().cloned())
            .collect();

        skills.into_iter().collect()
    }

    /// Append `profile` to the profile table and report every mutual-interest
    /// match against the pre-existing rows.
    ///
    /// The owning user must already be in the user table. The returned
    /// matches are also handed to the notifier, fire-and-forget, after the
    /// append has happened.
    pub fn register_profile(&self, profile: Profile) -> Result<Vec<InterestMatch>> {
        let mut tables = self.tables.write();

        let owner_email = tables
            .users
            .iter()
            .find(|u| u.id() == profile.user_id())
            .map(|u| u.email().clone())
            .ok_or(JoinError::UnknownUser(profile.user_id()))?;

        let matches =
            registration::scan_interest(&profile, &owner_email, &tables.users, &tables.profiles);

        debug!(owner = %profile.user_id(), matches = matches.len(), "Registered profile");
        tables.profiles.push(profile);
        drop(tables);

        notify::dispatch(self.notifier.as_ref(), &matches);

        Ok(matches)
    }

    /// Record a rating for a skill. Best-effort; out-of-range scores are
    /// dropped with a diagnostic.
    pub fn rate_skill(&self, user_id: impl Into<UserId>, skill: &str, score: u8, kind: RatingKind) {
        self.ratings.submit(user_id, skill, score, kind);
    }

    /// Average score submitted for `(skill, kind)`, or `None` when that pair
    /// has never been rated.
    pub fn average_rating(&self, skill: &str, kind: RatingKind) -> Option<f64> {
        self.ratings.average(skill, kind)
    }
}

impl Debug for Catalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("tables", &self.tables)
            .field("ratings", &self.ratings)
            .finish_non_exhaustive()
    }
}
