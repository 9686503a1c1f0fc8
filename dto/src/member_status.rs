use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

impl Display for MemberStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "active"),
            MemberStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for MemberStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            _ => Err(UnknownStatus(s.to_owned())),
        }
    }
}

/// Status constraint of a [crate::filter_spec::FilterSpec].
/// `any` lets every member through; it is also spelled `all` by the UI.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusConstraint {
    #[default]
    #[serde(alias = "all")]
    Any,
    Active,
    Inactive,
}

impl StatusConstraint {
    pub fn matches(&self, status: &MemberStatus) -> bool {
        match self {
            StatusConstraint::Any => true,
            StatusConstraint::Active => *status == MemberStatus::Active,
            StatusConstraint::Inactive => *status == MemberStatus::Inactive,
        }
    }
}

impl From<MemberStatus> for StatusConstraint {
    fn from(status: MemberStatus) -> Self {
        match status {
            MemberStatus::Active => StatusConstraint::Active,
            MemberStatus::Inactive => StatusConstraint::Inactive,
        }
    }
}

impl FromStr for StatusConstraint {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" | "any" => Ok(StatusConstraint::Any),
            _ => MemberStatus::from_str(s).map(StatusConstraint::from),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown member status `{0}`, expected one of: active, inactive")]
pub struct UnknownStatus(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        status = {"", "all", "any", "active", "inactive"},
        expected_constraint = {
            StatusConstraint::Any,
            StatusConstraint::Any,
            StatusConstraint::Any,
            StatusConstraint::Active,
            StatusConstraint::Inactive,
        }
    )]
    fn should_parse_status_constraint(status: &str, expected_constraint: StatusConstraint) {
        assert_eq!(Ok(expected_constraint), StatusConstraint::from_str(status));
    }

    #[parameterized(status = {"Active", "pending", " active"})]
    fn should_not_parse_unknown_status_constraint(status: &str) {
        assert_eq!(
            Err(UnknownStatus(status.to_owned())),
            StatusConstraint::from_str(status)
        );
    }

    #[parameterized(
        constraint = {
            StatusConstraint::Any,
            StatusConstraint::Any,
            StatusConstraint::Active,
            StatusConstraint::Active,
            StatusConstraint::Inactive,
            StatusConstraint::Inactive,
        },
        status = {
            MemberStatus::Active,
            MemberStatus::Inactive,
            MemberStatus::Active,
            MemberStatus::Inactive,
            MemberStatus::Active,
            MemberStatus::Inactive,
        },
        expected_result = {true, true, true, false, false, true}
    )]
    fn should_match_status(
        constraint: StatusConstraint,
        status: MemberStatus,
        expected_result: bool,
    ) {
        assert_eq!(expected_result, constraint.matches(&status));
    }

    #[test]
    fn should_deserialize_all_as_any() {
        let constraint: StatusConstraint = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(StatusConstraint::Any, constraint);
    }

    #[test]
    fn should_display_status() {
        assert_eq!("active", MemberStatus::Active.to_string());
        assert_eq!("inactive", MemberStatus::Inactive.to_string());
    }
}
