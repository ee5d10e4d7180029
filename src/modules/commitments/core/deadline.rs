// Deadline status of a commitment relative to a given day.
//
// Purpose
// - Classify due dates for display: overdue, due within a week, or on track.
//
// Boundaries
// - Pure. The caller supplies "today" so results are deterministic.

use chrono::NaiveDate;
use serde::Serialize;

pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Overdue,
    DueSoon,
    OnTrack,
}

impl DeadlineStatus {
    pub fn for_due_date(due_date: NaiveDate, today: NaiveDate) -> Self {
        let days_left = (due_date - today).num_days();
        if days_left < 0 {
            DeadlineStatus::Overdue
        } else if days_left <= DUE_SOON_WINDOW_DAYS {
            DeadlineStatus::DueSoon
        } else {
            DeadlineStatus::OnTrack
        }
    }
}
