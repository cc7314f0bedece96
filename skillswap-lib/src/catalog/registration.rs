//! Mutual-interest scanning for newly registered profiles.
//!
//! Registration itself is a table append; the scan produces plain
//! [`InterestMatch`] events for a dispatcher to deliver. Keeping delivery out
//! of this module means a dead notification channel can never affect whether
//! a profile was registered.

use getset::{CopyGetters, Getters};

use crate::catalog::records::{Profile, User};

/// A mutual-interest hit found while registering a profile: `skill` is
/// offered by one party and wanted by the other.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct InterestMatch {
    /// Contact address of the party to tell about the match.
    #[getset(get = "pub")]
    address: String,
    #[getset(get = "pub")]
    skill: String,
    #[getset(get_copy = "pub")]
    direction: MatchDirection,
}

/// Which side of the new profile the offered skill sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDirection {
    /// The new profile offers a skill an existing user wants.
    NewOffer,
    /// An existing profile offers a skill the new profile's owner wants.
    ExistingOffer,
}

impl InterestMatch {
    fn new(address: &str, skill: &str, direction: MatchDirection) -> Self {
        Self {
            address: address.into(),
            skill: skill.into(),
            direction,
        }
    }

    /// The notification text for this match.
    pub fn message(&self) -> String {
        match self.direction {
            MatchDirection::NewOffer => {
                format!("A new profile has been registered offering: {}", self.skill)
            }
            MatchDirection::ExistingOffer => {
                format!(
                    "An existing profile offers a skill you are interested in: {}",
                    self.skill
                )
            }
        }
    }
}

/// Scan the current tables for interest overlapping with `new_profile`.
///
/// One match is produced per matching skill, not per party pair, so two
/// parties sharing several skills generate several events. The new profile is
/// not compared against itself; only pre-existing rows are scanned.
pub(crate) fn scan_interest(
    new_profile: &Profile,
    owner_email: &str,
    users: &[User],
    profiles: &[Profile],
) -> Vec<InterestMatch> {
    let mut matches = Vec::new();

    // Existing users who want something the new profile offers
    for user in users {
        for skill in new_profile.offered_skills() {
            if user.interested_skills().contains(skill) {
                matches.push(InterestMatch::new(
                    user.email(),
                    skill,
                    MatchDirection::NewOffer,
                ));
            }
        }
    }

    // Existing profiles offering something the new profile's owner wants
    for existing in profiles {
        for skill in existing.offered_skills() {
            if new_profile.interested_skills().contains(skill) {
                matches.push(InterestMatch::new(
                    owner_email,
                    skill,
                    MatchDirection::ExistingOffer,
                ));
            }
        }
    }

    matches
}
