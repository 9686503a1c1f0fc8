use crate::member::Member;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome of a bulk import: members that made it into the roster,
/// and rows that did not, with the reasons why.
#[derive(Debug, Getters, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportReport {
    created: Vec<Member>,
    rejected: Vec<RejectedRow>,
}

impl ImportReport {
    pub fn new(created: Vec<Member>, rejected: Vec<RejectedRow>) -> Self {
        Self { created, rejected }
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct RejectedRow {
    line: String,
    reasons: Vec<String>,
}

impl RejectedRow {
    pub fn new(line: String, reasons: Vec<String>) -> Self {
        Self { line, reasons }
    }
}
