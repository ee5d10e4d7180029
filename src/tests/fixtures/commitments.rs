// Shared test fixtures for commitments: a draft builder backed by a JSON fixture,
// plus helpers producing confirmed records and remote rows.

use crate::modules::commitments::core::commitment::{Commitment, CommitmentDraft};
use crate::shared::infrastructure::remote_client::Row;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use std::fs;

const DRAFT_FIXTURE: &str = "./src/tests/fixtures/json/commitment_draft.json";
const ROW_FIXTURE: &str = "./src/tests/fixtures/json/commitment_row.json";

pub struct CommitmentDraftBuilder {
    inner: CommitmentDraft,
}

impl Default for CommitmentDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CommitmentDraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(DRAFT_FIXTURE).unwrap();
        Self { inner: serde_json::from_str(&json_str).unwrap() }
    }

    pub fn priority(mut self, v: u8) -> Self {
        self.inner.priority = v;
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn meeting_name(mut self, v: impl Into<String>) -> Self {
        self.inner.meeting_name = v.into();
        self
    }

    pub fn registration_date(mut self, v: NaiveDate) -> Self {
        self.inner.registration_date = v;
        self
    }

    pub fn due_date(mut self, v: NaiveDate) -> Self {
        self.inner.due_date = v;
        self
    }

    pub fn theme(mut self, v: impl Into<String>) -> Self {
        self.inner.theme = v.into();
        self
    }

    pub fn action(mut self, v: impl Into<String>) -> Self {
        self.inner.action = v.into();
        self
    }

    pub fn responsible(mut self, v: impl Into<String>) -> Self {
        self.inner.responsible = v.into();
        self
    }

    pub fn build(self) -> CommitmentDraft {
        self.inner
    }
}

pub fn commitment_row_json() -> Row {
    let json_str = fs::read_to_string(ROW_FIXTURE).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn make_commitment(id: &str, created_at: &str, category: &str, meeting_name: &str) -> Commitment {
    let draft = CommitmentDraftBuilder::new()
        .category(category)
        .meeting_name(meeting_name)
        .build();
    Commitment {
        id: id.to_string(),
        created_at: created_at.parse::<DateTime<Utc>>().unwrap(),
        priority: Some(draft.priority),
        category: Some(draft.category),
        meeting_name: Some(draft.meeting_name),
        registration_date: Some(draft.registration_date),
        due_date: Some(draft.due_date),
        theme: Some(draft.theme),
        action: Some(draft.action),
        responsible: Some(draft.responsible),
    }
}

/// A remote `commitments` row with the given identity, category and meeting name.
pub fn commitment_row(id: &str, created_at: &str, category: &str, meeting_name: &str) -> Row {
    let mut row = commitment_row_json();
    row["id"] = json!(id);
    row["created_at"] = json!(created_at);
    row["categoria"] = json!(category);
    row["nome_reuniao"] = json!(meeting_name);
    row
}

#[cfg(test)]
mod commitment_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_the_draft_fixture() {
        let draft = CommitmentDraftBuilder::default().build();
        assert_eq!(draft.priority, 3);
        assert_eq!(draft.category, "FIN");
        assert_eq!(draft.meeting_name, "Budget Review");
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    }

    #[rstest]
    fn it_should_override_fields_with_setters() {
        let draft = CommitmentDraftBuilder::new()
            .priority(1)
            .category("HR")
            .meeting_name("Hiring Plan")
            .theme("Headcount")
            .action("Open two roles")
            .responsible("Rui")
            .registration_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .due_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
            .build();
        assert_eq!(draft.priority, 1);
        assert_eq!(draft.category, "HR");
        assert_eq!(draft.meeting_name, "Hiring Plan");
        assert_eq!(draft.theme, "Headcount");
        assert_eq!(draft.action, "Open two roles");
        assert_eq!(draft.responsible, "Rui");
    }

    #[rstest]
    fn it_should_shape_remote_rows() {
        let row = commitment_row("c-9", "2024-02-02T00:00:00Z", "HR", "Hiring Plan");
        assert_eq!(row["id"], json!("c-9"));
        assert_eq!(row["categoria"], json!("HR"));
        assert_eq!(row["nome_reuniao"], json!("Hiring Plan"));
        assert_eq!(row["tema"], json!("Quarterly budget"));
    }
}
