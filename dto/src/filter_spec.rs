use crate::member_status::StatusConstraint;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Search term and structured constraints of one filtering pass over the roster.
/// An empty search, an unset year, an empty university and an `any` status
/// each let every member through.
#[derive(Debug, Getters, Default, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    search: String,
    #[serde(default)]
    graduation_year: Option<i32>,
    #[serde(default)]
    university: String,
    #[serde(default)]
    status: StatusConstraint,
}

impl FilterSpec {
    pub fn new(
        search: String,
        graduation_year: Option<i32>,
        university: String,
        status: StatusConstraint,
    ) -> Self {
        Self {
            search,
            graduation_year,
            university,
            status,
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_owned();
        self
    }

    pub fn with_graduation_year(mut self, graduation_year: i32) -> Self {
        self.graduation_year = Some(graduation_year);
        self
    }

    pub fn with_university(mut self, university: &str) -> Self {
        self.university = university.to_owned();
        self
    }

    pub fn with_status(mut self, status: StatusConstraint) -> Self {
        self.status = status;
        self
    }

    /// Whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.graduation_year.is_none()
            && self.university.is_empty()
            && self.status == StatusConstraint::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_empty_by_default() {
        assert!(FilterSpec::default().is_empty());
    }

    #[test]
    fn should_not_be_empty_with_any_criterion() {
        assert!(!FilterSpec::default().with_search("ahmet").is_empty());
        assert!(!FilterSpec::default().with_graduation_year(2019).is_empty());
        assert!(!FilterSpec::default().with_university("odtü").is_empty());
        assert!(
            !FilterSpec::default()
                .with_status(StatusConstraint::Inactive)
                .is_empty()
        );
    }

    #[test]
    fn should_deserialize_partial_filter() {
        let filter: FilterSpec =
            serde_json::from_str(r#"{"graduationYear":2019,"status":"all"}"#).unwrap();

        assert_eq!(FilterSpec::default().with_graduation_year(2019), filter);
    }
}
