//! Predicate filtering over the profile table.

use crate::catalog::records::Profile;

/// Criteria for narrowing the profile table.
///
/// Every term is optional; an absent or empty term places no constraint on
/// its field. A profile is kept iff every present term appears
/// case-insensitively in the corresponding field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileQuery {
    skill: Option<String>,
    days: Option<String>,
    time_range: Option<String>,
}

impl ProfileQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the profile category to listings about `term`.
    pub fn skill(mut self, term: &str) -> Self {
        self.skill = Some(term.into());
        self
    }

    pub fn days(mut self, term: &str) -> Self {
        self.days = Some(term.into());
        self
    }

    pub fn time_range(mut self, term: &str) -> Self {
        self.time_range = Some(term.into());
        self
    }

    pub fn is_match(&self, profile: &Profile) -> bool {
        field_contains(profile.category(), self.skill.as_deref())
            && field_contains(profile.selected_days(), self.days.as_deref())
            && field_contains(profile.preferred_time_range(), self.time_range.as_deref())
    }
}

/// An absent field never matches a present term.
fn field_contains(field: &Option<String>, term: Option<&str>) -> bool {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return true;
    };

    match field {
        Some(value) => value.to_lowercase().contains(&term.to_lowercase()),
        None => false,
    }
}

/// Keep the profiles matching `query`, preserving table order.
pub(crate) fn filter_profiles<'a>(profiles: &'a [Profile], query: &ProfileQuery) -> Vec<&'a Profile> {
    profiles.iter().filter(|p| query.is_match(p)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_profiles() -> Vec<Profile> {
        vec![
            Profile::new(1)
                .with_category("Cooking")
                .with_selected_days("Monday, Wednesday")
                .with_preferred_time_range("Morning"),
            Profile::new(2)
                .with_category("Music")
                .with_selected_days("Tuesday")
                .with_preferred_time_range("Evening"),
            Profile::new(3),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let profiles = sample_profiles();

        let matched = filter_profiles(&profiles, &ProfileQuery::new());

        assert_eq!(matched.len(), profiles.len());
        assert!(matched.iter().zip(&profiles).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_empty_terms_are_no_constraint() {
        let profiles = sample_profiles();

        let query = ProfileQuery::new().skill("").days("").time_range("");

        assert_eq!(filter_profiles(&profiles, &query).len(), profiles.len());
    }

    #[test]
    fn test_unmatched_term_returns_nothing() {
        let profiles = sample_profiles();

        let query = ProfileQuery::new().skill("carpentry");

        assert!(filter_profiles(&profiles, &query).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let profiles = sample_profiles();

        let query = ProfileQuery::new().skill("cook");
        let matched = filter_profiles(&profiles, &query);

        assert_eq!(matched.len(), 1);
        assert_eq!(
            matched.first().unwrap().category().as_deref(),
            Some("Cooking")
        );
    }

    #[test]
    fn test_terms_combine_as_and() {
        let profiles = sample_profiles();

        let query = ProfileQuery::new().skill("music").days("monday");

        assert!(filter_profiles(&profiles, &query).is_empty());

        let query = ProfileQuery::new().skill("music").days("tuesday");

        assert_eq!(filter_profiles(&profiles, &query).len(), 1);
    }

    #[test]
    fn test_absent_field_never_matches_present_term() {
        let profiles = sample_profiles();

        // Profile 3 has no fields set at all
        let query = ProfileQuery::new().time_range("morning");
        let matched = filter_profiles(&profiles, &query);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched.first().unwrap().user_id(), 1.into());
    }

    #[test]
    fn test_order_is_preserved() {
        let profiles = sample_profiles();

        let query = ProfileQuery::new().days("day");
        let matched = filter_profiles(&profiles, &query);

        let ids: Vec<_> = matched.iter().map(|p| p.user_id()).collect();
        assert_eq!(ids, vec![1.into(), 2.into()]);
    }
}
