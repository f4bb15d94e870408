use chrono::NaiveDate;
use shared::MonthBound;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Format a date as YYYY-MM-DD, the value format of `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format YYYY-MM-DD date string for display (e.g. "June 30, 2024").
/// Anything unparseable is returned unchanged.
pub fn format_date_for_display(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format a month bound for display (e.g. "March 2020")
pub fn format_month_for_display(month: &MonthBound) -> String {
    month.first_day().format("%B %Y").to_string()
}

/// Human readable label for a selected period
pub fn format_range_for_display(start_date: &str, end_date: &str) -> String {
    if start_date.is_empty() || end_date.is_empty() {
        return "No period selected".to_string();
    }
    format!(
        "{} to {}",
        format_date_for_display(start_date),
        format_date_for_display(end_date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2024-02-29"), "February 29, 2024");
        assert_eq!(format_date_for_display("2023-12-01"), "December 1, 2023");
        assert_eq!(format_date_for_display("2024-13-01"), "2024-13-01");
        assert_eq!(format_date_for_display("not a date"), "not a date");
    }

    #[wasm_bindgen_test]
    fn test_format_month_for_display() {
        let month: MonthBound = "2020-03".parse().unwrap();
        assert_eq!(format_month_for_display(&month), "March 2020");

        let december: MonthBound = "2023-12".parse().unwrap();
        assert_eq!(format_month_for_display(&december), "December 2023");
    }

    #[wasm_bindgen_test]
    fn test_format_range_for_display() {
        assert_eq!(
            format_range_for_display("2023-07-01", "2024-06-30"),
            "July 1, 2023 to June 30, 2024"
        );
        assert_eq!(format_range_for_display("2023-07-01", ""), "No period selected");
    }
}
