pub mod activity;
pub mod filter_spec;
pub mod filtered_members;
pub mod import_report;
pub mod member;
pub mod member_draft;
pub mod member_options;
pub mod member_status;
pub mod statistics;
