// Query view: category filter plus text search over the store's cached commitments.
//
// Purpose
// - Derive what the list screen shows, recomputed on every filter change and every keystroke.
//
// Responsibilities
// - Filter by exact category code first, then by case-insensitive substring search.
// - Search meeting name, theme, action and responsible. Null fields never match.
// - Preserve the input order. Never mutate the input.
//
// Boundaries
// - Pure. No input or output.

use crate::modules::commitments::core::commitment::Commitment;
use std::convert::Infallible;
use std::str::FromStr;

/// Sentinel codes meaning "no category filter".
const ALL_SENTINELS: [&str; 2] = ["ALL", "TODOS"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Code(String),
}

impl CategoryFilter {
    pub fn matches(&self, commitment: &Commitment) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Code(code) => commitment.category.as_deref() == Some(code.as_str()),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || ALL_SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(raw)) {
            CategoryFilter::All
        } else {
            CategoryFilter::Code(raw.to_string())
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(raw: Option<&str>) -> Self {
        raw.map(CategoryFilter::from).unwrap_or_default()
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(raw))
    }
}

fn matches_search(commitment: &Commitment, needle: &str) -> bool {
    [
        &commitment.meeting_name,
        &commitment.theme,
        &commitment.action,
        &commitment.responsible,
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

pub fn apply(commitments: &[Commitment], filter: &CategoryFilter, search_term: &str) -> Vec<Commitment> {
    let needle = search_term.to_lowercase();
    commitments
        .iter()
        .filter(|commitment| filter.matches(commitment))
        .filter(|commitment| needle.is_empty() || matches_search(commitment, &needle))
        .cloned()
        .collect()
}
