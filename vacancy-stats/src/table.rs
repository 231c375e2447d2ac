use crate::types::LanguageStatsTable;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders a stats table as fixed-column text: a title line, a header
/// row, and one row per language in table order.
pub fn render(title: &str, table: &LanguageStatsTable) -> String {
    let mut rows: Vec<[String; 4]> = vec![HEADERS.map(String::from)];
    for (language, stats) in table.iter() {
        rows.push([
            language.to_owned(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats
                .average_salary
                .map(|salary| salary.to_string())
                .unwrap_or_else(|| "-".to_owned()),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut rendered = String::from(title);
    rendered.push('\n');
    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell))
            .collect::<Vec<_>>()
            .join(" | ");
        rendered.push_str(line.trim_end());
        rendered.push('\n');
    }
    rendered
}
