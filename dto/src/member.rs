use crate::member_draft::MemberDraft;
use crate::member_status::MemberStatus;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A [Member] is one alumnus of the association, as held in the roster.
/// Its `id` is assigned once, when the member is created, and never changes.
#[derive(Debug, Getters, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: u64,
    name: String,
    phone: String,
    email: String,
    graduation_year: i32,
    university: String,
    department: String,
    status: MemberStatus,
    join_date: NaiveDate,
    #[serde(default)]
    custom_fields: BTreeMap<String, String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    photo: Option<String>,
}

impl Member {
    /// Build a member out of a draft.
    /// The draft join date wins over `join_date`, which is only a fallback.
    /// Fields the draft leaves out get their defaults.
    pub fn from_draft(id: u64, draft: MemberDraft, join_date: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            graduation_year: draft.graduation_year,
            university: draft.university,
            department: draft.department,
            status: draft.status.unwrap_or_default(),
            join_date: draft.join_date.unwrap_or(join_date),
            custom_fields: draft.custom_fields.unwrap_or_default(),
            notes: draft.notes,
            photo: draft.photo,
        }
    }

    /// Replace the editable fields with the draft's.
    /// Optional fields the draft leaves out keep their current value.
    /// `id` and `join_date` are left untouched.
    pub fn apply_draft(&mut self, draft: MemberDraft) {
        self.name = draft.name;
        self.phone = draft.phone;
        self.email = draft.email;
        self.graduation_year = draft.graduation_year;
        self.university = draft.university;
        self.department = draft.department;
        if let Some(status) = draft.status {
            self.status = status;
        }
        if let Some(custom_fields) = draft.custom_fields {
            self.custom_fields = custom_fields;
        }
        if let Some(notes) = draft.notes {
            self.notes = Some(notes);
        }
        if let Some(photo) = draft.photo {
            self.photo = Some(photo);
        }
    }

    pub fn set_status(&mut self, status: MemberStatus) {
        self.status = status;
    }

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Member {
        #[allow(clippy::too_many_arguments)]
        pub fn new_test(
            id: u64,
            name: &str,
            phone: &str,
            email: &str,
            graduation_year: i32,
            university: &str,
            status: MemberStatus,
            join_date: NaiveDate,
        ) -> Self {
            Member {
                id,
                name: name.to_owned(),
                phone: phone.to_owned(),
                email: email.to_owned(),
                graduation_year,
                university: university.to_owned(),
                department: "".to_owned(),
                status,
                join_date,
                custom_fields: BTreeMap::new(),
                notes: None,
                photo: None,
            }
        }
    }

    pub fn ahmet_yilmaz() -> Member {
        let mut member = Member::new_test(
            1,
            "Ahmet Yılmaz",
            "0532 123 4567",
            "ahmet@example.com",
            2020,
            "İstanbul Üniversitesi",
            MemberStatus::Active,
            NaiveDate::from_ymd_opt(2021, 1, 15).unwrap(),
        );
        member.department = "Bilgisayar Mühendisliği".to_owned();
        member
            .custom_fields
            .insert("meslek".to_owned(), "Yazılım Geliştirici".to_owned());
        member
            .custom_fields
            .insert("şehir".to_owned(), "İstanbul".to_owned());
        member
    }

    pub fn fatma_demir() -> Member {
        let mut member = Member::new_test(
            2,
            "Fatma Demir",
            "0533 987 6543",
            "fatma@example.com",
            2019,
            "Boğaziçi Üniversitesi",
            MemberStatus::Active,
            NaiveDate::from_ymd_opt(2020, 9, 10).unwrap(),
        );
        member.department = "İktisat".to_owned();
        member
            .custom_fields
            .insert("meslek".to_owned(), "Ekonomist".to_owned());
        member
            .custom_fields
            .insert("şehir".to_owned(), "Ankara".to_owned());
        member
    }

    pub fn mehmet_ozkan() -> Member {
        let mut member = Member::new_test(
            3,
            "Mehmet Özkan",
            "0534 555 1234",
            "mehmet@example.com",
            2018,
            "ODTÜ",
            MemberStatus::Inactive,
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
        );
        member.department = "Makine Mühendisliği".to_owned();
        member
    }

    pub fn ayse_kaya() -> Member {
        let mut member = Member::new_test(
            4,
            "Ayşe Kaya",
            "0535 555 5678",
            "ayse@example.com",
            2019,
            "İTÜ",
            MemberStatus::Active,
            NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
        );
        member.department = "Endüstri Mühendisliği".to_owned();
        member
    }

    pub fn draft_of(member: &Member) -> MemberDraft {
        MemberDraft::new(
            member.name.clone(),
            member.phone.clone(),
            member.email.clone(),
            member.graduation_year,
            member.university.clone(),
            member.department.clone(),
        )
        .with_status(member.status)
        .with_join_date(member.join_date)
    }

    #[test]
    fn should_build_member_from_draft() {
        let fallback_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let draft = draft_of(&fatma_demir());

        let member = Member::from_draft(2, draft, fallback_date);

        assert_eq!(&2, member.id());
        assert_eq!("Fatma Demir", member.name());
        assert_eq!(&NaiveDate::from_ymd_opt(2020, 9, 10).unwrap(), member.join_date());
    }

    #[test]
    fn should_use_fallback_join_date() {
        let fallback_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let draft = MemberDraft::new(
            "Ayşe Kaya".to_owned(),
            "0535 555 5678".to_owned(),
            "ayse@example.com".to_owned(),
            2019,
            "İTÜ".to_owned(),
            "Endüstri Mühendisliği".to_owned(),
        );

        let member = Member::from_draft(7, draft, fallback_date);

        assert_eq!(&fallback_date, member.join_date());
    }

    #[test]
    fn should_keep_id_and_join_date_when_applying_draft() {
        let mut member = ahmet_yilmaz();
        let draft = draft_of(&fatma_demir());

        member.apply_draft(draft);

        assert_eq!(&1, member.id());
        assert_eq!(&NaiveDate::from_ymd_opt(2021, 1, 15).unwrap(), member.join_date());
        assert_eq!("Fatma Demir", member.name());
        assert_eq!(&2019, member.graduation_year());
    }

    #[test]
    fn should_keep_optional_fields_left_out_of_draft() {
        let mut member = mehmet_ozkan();
        member.notes = Some("Eski yönetim kurulu üyesi".to_owned());
        member
            .custom_fields
            .insert("şehir".to_owned(), "Ankara".to_owned());
        let draft = MemberDraft::new(
            "Mehmet Özkan".to_owned(),
            "0534 555 1234".to_owned(),
            "mehmet@example.com".to_owned(),
            2017,
            "ODTÜ".to_owned(),
            "Makine Mühendisliği".to_owned(),
        );

        member.apply_draft(draft);

        assert_eq!(&2017, member.graduation_year());
        assert_eq!(&MemberStatus::Inactive, member.status());
        assert_eq!(&Some("Eski yönetim kurulu üyesi".to_owned()), member.notes());
        assert_eq!(Some(&"Ankara".to_owned()), member.custom_fields().get("şehir"));
    }

    #[test]
    fn should_replace_optional_fields_sent_in_draft() {
        let mut member = ahmet_yilmaz();
        let draft = draft_of(&ahmet_yilmaz())
            .with_status(MemberStatus::Inactive)
            .with_custom_field("meslek".to_owned(), "Mimar".to_owned())
            .with_photo("/assets/ahmet.png".to_owned());

        member.apply_draft(draft);

        assert_eq!(&MemberStatus::Inactive, member.status());
        assert_eq!(
            &BTreeMap::from([("meslek".to_owned(), "Mimar".to_owned())]),
            member.custom_fields()
        );
        assert_eq!(&Some("/assets/ahmet.png".to_owned()), member.photo());
    }

    #[test]
    fn should_default_optional_fields_of_new_member() {
        let fallback_date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let json = r#"{"name":"Ayşe Kaya","phone":"0535 555 5678","email":"ayse@example.com","graduationYear":2019,"university":"İTÜ","department":"Endüstri Mühendisliği"}"#;
        let draft: MemberDraft = serde_json::from_str(json).unwrap();

        let member = Member::from_draft(4, draft, fallback_date);

        assert_eq!(&MemberStatus::Active, member.status());
        assert!(member.custom_fields().is_empty());
        assert_eq!(&None, member.notes());
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(fatma_demir()).unwrap();

        assert_eq!(2019, json["graduationYear"]);
        assert_eq!("2020-09-10", json["joinDate"]);
        assert_eq!("Ekonomist", json["customFields"]["meslek"]);
        assert_eq!("active", json["status"]);
    }
}
