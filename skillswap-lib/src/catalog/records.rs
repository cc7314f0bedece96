//! Typed records for the tables described by the dataset.
//!
//! Profiles reference their owning user through an explicit [`UserId`] key.
//! Joins go through that key and fail loudly when it is missing, rather than
//! relying on the two tables staying row-aligned.

use derive_more::{Display, From};
use getset::{CopyGetters, Getters};
use serde::Deserialize;

/// Stable identifier of a user row, and the key profiles join on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

/// A person who can own profiles, receive notifications, and submit ratings.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Deserialize)]
pub struct User {
    #[getset(get_copy = "pub")]
    id: UserId,
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    surname: String,
    #[getset(get = "pub")]
    email: String,
    /// Skills this user would like to learn.
    #[getset(get = "pub")]
    #[serde(default)]
    interested_skills: Vec<String>,
}

impl User {
    pub fn new<I, S>(
        id: impl Into<UserId>,
        name: &str,
        surname: &str,
        email: &str,
        interested_skills: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            interested_skills: interested_skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// A skill-exchange listing: what its owner offers and wants, plus the
/// scheduling and display fields the matcher and summary builder read.
///
/// Optional fields stay `None` when the dataset leaves them out; an absent
/// field never matches a filter term.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Deserialize)]
pub struct Profile {
    #[getset(get_copy = "pub")]
    user_id: UserId,
    #[getset(get = "pub")]
    category: Option<String>,
    #[getset(get = "pub")]
    selected_days: Option<String>,
    #[getset(get = "pub")]
    preferred_time_range: Option<String>,
    #[getset(get = "pub")]
    location: Option<String>,
    #[getset(get = "pub")]
    description: Option<String>,
    #[getset(get = "pub")]
    profile_picture: Option<String>,
    #[getset(get = "pub")]
    #[serde(default)]
    offered_skills: Vec<String>,
    #[getset(get = "pub")]
    #[serde(default)]
    interested_skills: Vec<String>,
}

impl Profile {
    /// A profile with only its owner set. Fill in the rest with the `with_*`
    /// methods.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            category: None,
            selected_days: None,
            preferred_time_range: None,
            location: None,
            description: None,
            profile_picture: None,
            offered_skills: Vec::new(),
            interested_skills: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_selected_days(mut self, days: &str) -> Self {
        self.selected_days = Some(days.into());
        self
    }

    pub fn with_preferred_time_range(mut self, time_range: &str) -> Self {
        self.preferred_time_range = Some(time_range.into());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_profile_picture(mut self, profile_picture: &str) -> Self {
        self.profile_picture = Some(profile_picture.into());
        self
    }

    pub fn with_offered_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.offered_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_interested_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interested_skills = skills.into_iter().map(Into::into).collect();
        self
    }
}

/// Reference table entry for a known skill. Loaded alongside the other
/// tables but not consulted by the matcher.
#[derive(Debug, Clone, PartialEq, Getters, Deserialize)]
#[getset(get = "pub")]
pub struct Skill {
    name: String,
    #[serde(default)]
    category: Option<String>,
}

/// Reference table entry for a skill category.
#[derive(Debug, Clone, PartialEq, Getters, Deserialize)]
#[getset(get = "pub")]
pub struct Category {
    name: String,
}

/// Whether a rating targets a skill someone offers or one they are seeking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RatingKind {
    #[default]
    Offered,
    Interested,
}

/// A single rating submission. Append-only; duplicates from the same user
/// are kept and averaged.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Rating {
    #[getset(get_copy = "pub")]
    user_id: UserId,
    #[getset(get = "pub")]
    skill: String,
    #[getset(get_copy = "pub")]
    score: u8,
    #[getset(get_copy = "pub")]
    kind: RatingKind,
}

impl Rating {
    pub(crate) fn new(user_id: UserId, skill: &str, score: u8, kind: RatingKind) -> Self {
        Self {
            user_id,
            skill: skill.into(),
            score,
            kind,
        }
    }
}

/// Display projection of a matched profile joined with its owning user.
///
/// `interested_skills` comes from the profile, not the user.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Summary {
    first_name: String,
    last_name: String,
    location: Option<String>,
    description: Option<String>,
    profile_picture: Option<String>,
    interested_skills: Vec<String>,
}

impl Summary {
    pub(crate) fn new(user: &User, profile: &Profile) -> Self {
        Self {
            first_name: user.name().clone(),
            last_name: user.surname().clone(),
            location: profile.location().clone(),
            description: profile.description().clone(),
            profile_picture: profile.profile_picture().clone(),
            interested_skills: profile.interested_skills().clone(),
        }
    }
}
