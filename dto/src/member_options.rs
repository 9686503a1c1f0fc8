use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Values offered by the filter menus, derived from the whole roster.
#[derive(Debug, Getters, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberOptions {
    graduation_years: Vec<i32>,
    universities: Vec<String>,
}

impl MemberOptions {
    pub fn new(graduation_years: Vec<i32>, universities: Vec<String>) -> Self {
        Self {
            graduation_years,
            universities,
        }
    }
}
