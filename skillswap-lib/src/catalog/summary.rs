//! Joining matched profiles with their owning users.

use std::collections::HashMap;

use thiserror::Error;

use crate::catalog::records::{Profile, Summary, User, UserId};

pub type Result<T> = std::result::Result<T, JoinError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    #[error("Profile references a user that is not in the user table: {0}")]
    UnknownUser(UserId),
}

/// Build one [`Summary`] per matched profile, in order, by joining each
/// profile to its owner through the user table.
///
/// A profile whose owner is missing aborts the whole join; a partial result
/// would silently hide the broken key.
pub(crate) fn summarize(users: &[User], matched: &[&Profile]) -> Result<Vec<Summary>> {
    let by_id: HashMap<UserId, &User> = users.iter().map(|u| (u.id(), u)).collect();

    matched
        .iter()
        .map(|profile| {
            let user = by_id
                .get(&profile.user_id())
                .ok_or(JoinError::UnknownUser(profile.user_id()))?;
            Ok(Summary::new(user, profile))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_users() -> Vec<User> {
        vec![
            User::new(1, "Ada", "Lovelace", "ada@example.com", ["guitar"]),
            User::new(2, "Alan", "Turing", "alan@example.com", Vec::<String>::new()),
        ]
    }

    #[test]
    fn test_one_summary_per_matched_profile() {
        let users = sample_users();
        let profiles = vec![
            Profile::new(2).with_location("Manchester"),
            Profile::new(1).with_location("London"),
        ];
        let matched: Vec<_> = profiles.iter().collect();

        let summaries = summarize(&users, &matched).unwrap();

        assert_eq!(summaries.len(), matched.len());
        let names: Vec<_> = summaries.iter().map(|s| s.first_name().as_str()).collect();
        assert_eq!(names, vec!["Alan", "Ada"]);
    }

    #[test]
    fn test_interested_skills_come_from_profile() {
        let users = sample_users();
        let profiles = vec![Profile::new(1).with_interested_skills(["cooking"])];
        let matched: Vec<_> = profiles.iter().collect();

        let summaries = summarize(&users, &matched).unwrap();

        // User 1 is interested in guitar, but the summary must reflect the
        // profile's own interests
        assert_eq!(
            summaries.first().unwrap().interested_skills(),
            &["cooking"]
        );
    }

    #[test]
    fn test_unknown_owner_is_a_join_error() {
        let users = sample_users();
        let profiles = vec![Profile::new(1), Profile::new(42)];
        let matched: Vec<_> = profiles.iter().collect();

        assert_eq!(
            summarize(&users, &matched),
            Err(JoinError::UnknownUser(42.into()))
        );
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(summarize(&sample_users(), &[]).unwrap().len(), 0);
    }
}
