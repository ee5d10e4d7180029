// CSV export of the cached commitments, in cache order.
//
// Format
// - UTF-8 with a leading byte order mark so spreadsheet tools pick the encoding.
// - Header row in the users' language, rows joined with "\n".
// - Meeting name, theme and action are always quoted. Other text is quoted only when it needs to be.
// - Dates are written as dd/mm/yyyy.
// - Null fields become empty cells. Always-quoted fields become `""`.

use crate::modules::commitments::core::commitment::Commitment;
use chrono::NaiveDate;

pub const EXPORT_FILE_NAME: &str = "compromissos.csv";

pub const CSV_HEADERS: [&str; 8] = [
    "Prioridade",
    "Nome da Reunião",
    "Data Registro",
    "Tema",
    "Ação",
    "Responsável",
    "Data Prazo",
    "Área",
];

const BYTE_ORDER_MARK: char = '\u{feff}';

fn quoted(text: Option<&str>) -> String {
    format!("\"{}\"", text.unwrap_or_default().replace('"', "\"\""))
}

fn quoted_if_needed(text: Option<&str>) -> String {
    match text {
        Some(text) if text.contains([',', '"', '\n', '\r']) => quoted(Some(text)),
        Some(text) => text.to_string(),
        None => String::new(),
    }
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

fn to_record(commitment: &Commitment) -> String {
    [
        commitment.priority.map(|p| p.to_string()).unwrap_or_default(),
        quoted(commitment.meeting_name.as_deref()),
        format_date(commitment.registration_date),
        quoted(commitment.theme.as_deref()),
        quoted(commitment.action.as_deref()),
        quoted_if_needed(commitment.responsible.as_deref()),
        format_date(commitment.due_date),
        quoted_if_needed(commitment.category.as_deref()),
    ]
    .join(",")
}

pub fn export_csv(commitments: &[Commitment]) -> String {
    let mut lines = Vec::with_capacity(commitments.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(commitments.iter().map(to_record));
    format!("{BYTE_ORDER_MARK}{}", lines.join("\n"))
}
