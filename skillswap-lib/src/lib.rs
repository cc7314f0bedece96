//! Core matching, rating, and registration logic for Skillswap.
//!
//! The [`Catalog`] is the entry point: it owns the in-memory user and profile
//! tables, the rating accumulator, and the notification channel, and exposes
//! the operations the request layer calls into.

use thiserror::Error;

pub mod catalog;
pub mod notify;

pub use catalog::{
    Catalog, Category, Dataset, InterestMatch, JoinError, LoadError, MatchDirection, Profile,
    ProfileQuery, Rating, RatingKind, RatingStore, Skill, Summary, User, UserId,
};
pub use notify::{Notifier, TracingNotifier};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Join(#[from] JoinError),
}
