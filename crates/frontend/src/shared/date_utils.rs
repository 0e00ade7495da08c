/// Utilities for date formatting
///
/// The API sends ISO dates (`1986-06-26`, sometimes `1986-06-26T00:00:00`);
/// the console shows them as DD/MM/YYYY.
use chrono::NaiveDate;

/// Placeholder for a missing date
pub const NO_DATE: &str = "N/A";

/// Format ISO date string to DD/MM/YYYY
/// Example: "1986-06-26" or "1986-06-26T00:00:00" -> "26/06/1986"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_input_value(date_str);
    if date_part.is_empty() {
        return NO_DATE.to_string();
    }
    match NaiveDate::parse_from_str(&date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Value for an `<input type="date">`: the part before `T`, trimmed.
pub fn date_input_value(date_str: &str) -> String {
    date_str
        .split('T')
        .next()
        .unwrap_or(date_str)
        .trim()
        .to_string()
}
