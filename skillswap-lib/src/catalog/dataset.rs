//! Loading and validating the four-table dataset.
//!
//! The dataset is a TOML document holding `[[users]]`, `[[profiles]]`,
//! `[[skills]]`, and `[[categories]]` arrays of tables. Cross-table keys are
//! checked at load time so joins can only fail on rows appended later.

use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::records::{Category, Profile, Skill, User, UserId};

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Duplicate user id in the user table: {0}")]
    DuplicateUserId(UserId),
    #[error("Profile references a user id not present in the user table: {0}")]
    UnknownOwner(UserId),
}

/// The parsed source tables. Skills and categories are carried along for the
/// request layer but never consulted by the matcher.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Read and validate the dataset at `path`. Nothing is retained on
    /// failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let dataset: Self = toml::from_str(&raw)?;
        dataset.validate()?;

        info!(
            users = dataset.users.len(),
            profiles = dataset.profiles.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// User ids must be unique and every profile's owner must exist.
    pub(crate) fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for user in &self.users {
            if !ids.insert(user.id()) {
                return Err(LoadError::DuplicateUserId(user.id()));
            }
        }

        for profile in &self.profiles {
            if !ids.contains(&profile.user_id()) {
                return Err(LoadError::UnknownOwner(profile.user_id()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
        [[users]]
        id = 1
        name = "Ada"
        surname = "Lovelace"
        email = "ada@example.com"
        interested_skills = ["guitar"]

        [[users]]
        id = 2
        name = "Alan"
        surname = "Turing"
        email = "alan@example.com"

        [[profiles]]
        user_id = 1
        category = "Music"
        selected_days = "Monday"
        preferred_time_range = "Morning"
        offered_skills = ["piano"]

        [[skills]]
        name = "piano"
        category = "Music"

        [[categories]]
        name = "Music"
    "#;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.users.len(), 2);
        assert_eq!(dataset.profiles.len(), 1);
        assert_eq!(dataset.skills.len(), 1);
        assert_eq!(dataset.categories.len(), 1);

        let profile = dataset.profiles.first().unwrap();
        assert_eq!(profile.user_id(), 1.into());
        assert_eq!(profile.location(), &None);
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let dataset: Dataset = toml::from_str("").unwrap();

        assert!(dataset.users.is_empty());
        assert!(dataset.profiles.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            Dataset::load("/nonexistent/dataset.toml"),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_source_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[users]]\nid = \"not a number\"").unwrap();

        assert!(matches!(
            Dataset::load(file.path()),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_user_id_is_rejected() {
        let dataset = Dataset {
            users: vec![
                User::new(1, "Ada", "Lovelace", "ada@example.com", Vec::<String>::new()),
                User::new(1, "Alan", "Turing", "alan@example.com", Vec::<String>::new()),
            ],
            ..Default::default()
        };

        assert!(matches!(
            dataset.validate(),
            Err(LoadError::DuplicateUserId(id)) if id == 1.into()
        ));
    }

    #[test]
    fn test_unknown_owner_is_rejected() {
        let dataset = Dataset {
            users: vec![User::new(
                1,
                "Ada",
                "Lovelace",
                "ada@example.com",
                Vec::<String>::new(),
            )],
            profiles: vec![Profile::new(9)],
            ..Default::default()
        };

        assert!(matches!(
            dataset.validate(),
            Err(LoadError::UnknownOwner(id)) if id == 9.into()
        ));
    }
}
