use fractic_server_error::ServerError;

use crate::{entities::Expense, errors::CsvExportFailed};

const HEADER: [&str; 5] = ["Date", "Title", "Category", "Amount", "Notes"];

pub(crate) struct CsvExporter;

impl CsvExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// One row per expense, newest first. Commas in free text become ';' and
    /// line breaks become spaces, so every row stays a single line.
    pub(crate) fn export(&self, expenses: &[Expense]) -> Result<String, ServerError> {
        let mut sorted: Vec<&Expense> = expenses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| CsvExportFailed::with_debug(&e))?;
        for expense in sorted {
            writer
                .write_record([
                    expense.date.format("%Y-%m-%d").to_string(),
                    sanitize(&expense.title),
                    sanitize(expense.category.display_name()),
                    format!("{:.2}", expense.amount),
                    sanitize(expense.notes.as_deref().unwrap_or("")),
                ])
                .map_err(|e| CsvExportFailed::with_debug(&e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CsvExportFailed::with_debug(e.error()))?;
        String::from_utf8(bytes).map_err(|e| CsvExportFailed::with_debug(&e))
    }
}

fn sanitize(s: &str) -> String {
    s.replace(',', ";").replace(|c: char| c == '\r' || c == '\n', " ")
}
