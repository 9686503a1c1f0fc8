use crate::member_status::MemberStatus;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The editable part of a member, as submitted when creating or editing one.
/// It carries no identifier: the roster assigns it on creation.
///
/// `status`, `custom_fields`, `notes` and `photo` may be left out:
/// a new member then gets the defaults, while an edited member keeps its current values.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDraft {
    pub(crate) name: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) graduation_year: i32,
    pub(crate) university: String,
    pub(crate) department: String,
    #[serde(default)]
    pub(crate) status: Option<MemberStatus>,
    #[serde(default)]
    pub(crate) join_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) custom_fields: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub(crate) notes: Option<String>,
    #[serde(default)]
    pub(crate) photo: Option<String>,
}

impl MemberDraft {
    pub fn new(
        name: String,
        phone: String,
        email: String,
        graduation_year: i32,
        university: String,
        department: String,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            graduation_year,
            university,
            department,
            status: None,
            join_date: None,
            custom_fields: None,
            notes: None,
            photo: None,
        }
    }

    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_join_date(mut self, join_date: NaiveDate) -> Self {
        self.join_date = Some(join_date);
        self
    }

    pub fn with_custom_field(mut self, key: String, value: String) -> Self {
        self.custom_fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key, value);
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn with_photo(mut self, photo: String) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Trim text fields and lowercase the email, the way they are stored.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_lowercase(),
            university: self.university.trim().to_owned(),
            department: self.department.trim().to_owned(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_draft() {
        let draft = MemberDraft::new(
            "  Ahmet Yılmaz ".to_owned(),
            " 0532 123 4567".to_owned(),
            " Ahmet@Example.com ".to_owned(),
            2020,
            "İstanbul Üniversitesi ".to_owned(),
            " Bilgisayar Mühendisliği".to_owned(),
        )
        .normalized();

        assert_eq!("Ahmet Yılmaz", draft.name());
        assert_eq!("0532 123 4567", draft.phone());
        assert_eq!("ahmet@example.com", draft.email());
        assert_eq!("İstanbul Üniversitesi", draft.university());
        assert_eq!("Bilgisayar Mühendisliği", draft.department());
    }

    #[test]
    fn should_deserialize_draft_with_defaults() {
        let json = r#"{"name":"Fatma Demir","phone":"0533 987 6543","email":"fatma@example.com","graduationYear":2019,"university":"Boğaziçi Üniversitesi","department":"İktisat"}"#;
        let draft: MemberDraft = serde_json::from_str(json).unwrap();

        assert_eq!(&None, draft.status());
        assert_eq!(&None, draft.join_date());
        assert_eq!(&None, draft.custom_fields());
        assert_eq!(&None, draft.notes());
        assert_eq!(&2019, draft.graduation_year());
    }
}
