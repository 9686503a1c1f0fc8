use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Getters, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterStatistics {
    total_members: usize,
    inactive_members: usize,
    graduation_year_distribution: BTreeMap<i32, usize>,
    university_distribution: BTreeMap<String, usize>,
    recent_members: Vec<Member>,
}

impl RosterStatistics {
    pub fn new(
        total_members: usize,
        inactive_members: usize,
        graduation_year_distribution: BTreeMap<i32, usize>,
        university_distribution: BTreeMap<String, usize>,
        recent_members: Vec<Member>,
    ) -> Self {
        Self {
            total_members,
            inactive_members,
            graduation_year_distribution,
            university_distribution,
            recent_members,
        }
    }
}
