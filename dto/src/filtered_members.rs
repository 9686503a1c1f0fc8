use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Members visible through a filter, with the size of the whole roster.
#[derive(Debug, Getters, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilteredMembers {
    members: Vec<Member>,
    total: usize,
    visible: usize,
}

impl FilteredMembers {
    pub fn new(members: Vec<Member>, total: usize) -> Self {
        let visible = members.len();
        Self {
            members,
            total,
            visible,
        }
    }
}
