use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Login,
    Logout,
    MemberCreate,
    MemberUpdate,
    MemberDelete,
    MemberDeactivate,
    MemberImport,
}

impl Display for ActivityAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let action = match self {
            ActivityAction::Login => "login",
            ActivityAction::Logout => "logout",
            ActivityAction::MemberCreate => "member_create",
            ActivityAction::MemberUpdate => "member_update",
            ActivityAction::MemberDelete => "member_delete",
            ActivityAction::MemberDeactivate => "member_deactivate",
            ActivityAction::MemberImport => "member_import",
        };
        write!(f, "{action}")
    }
}

impl FromStr for ActivityAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(ActivityAction::Login),
            "logout" => Ok(ActivityAction::Logout),
            "member_create" => Ok(ActivityAction::MemberCreate),
            "member_update" => Ok(ActivityAction::MemberUpdate),
            "member_delete" => Ok(ActivityAction::MemberDelete),
            "member_deactivate" => Ok(ActivityAction::MemberDeactivate),
            "member_import" => Ok(ActivityAction::MemberImport),
            _ => Err(UnknownAction(s.to_owned())),
        }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("Unknown activity action: {0}")]
pub struct UnknownAction(pub String);

/// Something an operator did, as kept in the activity log.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    id: u64,
    operator: String,
    action: ActivityAction,
    description: String,
    target_id: Option<u64>,
    created_at: DateTime<Utc>,
}

impl Activity {
    pub fn new(
        id: u64,
        operator: String,
        action: ActivityAction,
        description: String,
        target_id: Option<u64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            operator,
            action,
            description,
            target_id,
            created_at,
        }
    }
}

/// The most recent activities matching a query, newest first.
/// `total` counts every matching activity, including those beyond the limit.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityPage {
    logs: Vec<Activity>,
    total: usize,
}

impl ActivityPage {
    pub fn new(logs: Vec<Activity>, total: usize) -> Self {
        Self { logs, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use parameterized::parameterized;

    #[parameterized(value = {
        "login", "logout", "member_create", "member_update",
        "member_delete", "member_deactivate", "member_import"
    })]
    fn should_parse_displayed_action(value: &str) {
        let action = ActivityAction::from_str(value).unwrap();

        assert_eq!(value, action.to_string());
    }

    #[test]
    fn should_not_parse_unknown_action() {
        assert_eq!(
            Err(UnknownAction("member_export".to_owned())),
            ActivityAction::from_str("member_export")
        );
    }

    #[test]
    fn should_serialize_activity_in_camel_case() {
        let activity = Activity::new(
            7,
            "ACAR".to_owned(),
            ActivityAction::MemberUpdate,
            "Member 3 updated".to_owned(),
            Some(3),
            Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap(),
        );

        let json = serde_json::to_value(&activity).unwrap();

        assert_eq!("member_update", json["action"]);
        assert_eq!(3, json["targetId"]);
        assert_eq!("2025-06-01T10:30:00Z", json["createdAt"]);
    }
}
