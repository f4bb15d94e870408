use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::AvailableMonthsResponse;

/// Number of months covered by the "last 12 months" preset, counting the latest month.
const TRAILING_WINDOW_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthBoundParseError {
    #[error("Expected a YYYY-MM month, got '{0}'")]
    Format(String),
    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),
    #[error("Year must be between 1 and 9999, got {0}")]
    YearOutOfRange(i32),
}

/// A calendar month used as a data boundary, serialized as "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthBound {
    first_day: NaiveDate,
}

impl MonthBound {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthBoundParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthBoundParseError::MonthOutOfRange(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(MonthBoundParseError::YearOutOfRange(year));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| MonthBoundParseError::Format(format!("{:04}-{:02}", year, month)))
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Day 1 of this month
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last day of this month: the day before the first of the following month
    pub fn last_day(&self) -> NaiveDate {
        self.first_day + Months::new(1) - Days::new(1)
    }

    /// First day of the month `months` before this one, rolling the year over as needed
    pub fn first_day_months_back(&self, months: u32) -> NaiveDate {
        self.first_day - Months::new(months)
    }
}

impl fmt::Display for MonthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthBound {
    type Err = MonthBoundParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let format_error = || MonthBoundParseError::Format(s.to_string());

        let (year, month) = trimmed.split_once('-').ok_or_else(format_error)?;
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(format_error());
        }

        let year = year.parse::<i32>().map_err(|_| format_error())?;
        let month = month.parse::<u32>().map_err(|_| format_error())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthBound {
    type Error = MonthBoundParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthBound> for String {
    fn from(bound: MonthBound) -> Self {
        bound.to_string()
    }
}

/// Last calendar day of the given month, or `None` if the month is not a valid calendar month
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    MonthBound::new(year, month).ok().map(|bound| bound.last_day())
}

/// Quick-select shortcuts offered by the date range picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePreset {
    /// January 1 of the latest year through the end of the latest month
    YearToDate,
    /// The twelve months ending with the latest month
    Last12Months,
    /// Everything from the earliest month with data
    AllTime,
}

impl DatePreset {
    pub const ALL: [DatePreset; 3] = [
        DatePreset::YearToDate,
        DatePreset::Last12Months,
        DatePreset::AllTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::YearToDate => "YTD",
            DatePreset::Last12Months => "Last 12 months",
            DatePreset::AllTime => "All time",
        }
    }
}

/// A concrete calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Range notification handed to whoever owns the selected period.
///
/// Dates are carried as the literal ISO strings the picker holds, so manual
/// input is forwarded exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChange {
    pub start_date: String,
    pub end_date: String,
}

impl From<DateRange> for RangeChange {
    fn from(range: DateRange) -> Self {
        Self {
            start_date: range.start_iso(),
            end_date: range.end_iso(),
        }
    }
}

/// The earliest and latest months that have transaction data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min_month: MonthBound,
    pub latest_month: MonthBound,
}

impl DateBounds {
    pub fn new(min_month: MonthBound, latest_month: MonthBound) -> Self {
        Self {
            min_month,
            latest_month,
        }
    }

    /// Build bounds from the available-months payload.
    ///
    /// Returns `None` when either month is missing or malformed; callers show a
    /// loading placeholder in that case instead of doing any date math.
    pub fn from_available(available: &AvailableMonthsResponse) -> Option<Self> {
        let min_month = available.min_month.as_deref()?;
        let latest_month = available.latest_with_data.as_deref()?;

        match (min_month.parse::<MonthBound>(), latest_month.parse::<MonthBound>()) {
            (Ok(min_month), Ok(latest_month)) => Some(Self::new(min_month, latest_month)),
            (Err(e), _) | (_, Err(e)) => {
                debug!("Ignoring unusable available-months bounds: {}", e);
                None
            }
        }
    }

    /// Resolve a preset into concrete dates. Every preset ends on the last day of the latest month.
    pub fn resolve(&self, preset: DatePreset) -> DateRange {
        let end = self.latest_month.last_day();
        let start = match preset {
            DatePreset::YearToDate => self
                .latest_month
                .first_day_months_back(self.latest_month.month() - 1),
            DatePreset::Last12Months => self
                .latest_month
                .first_day_months_back(TRAILING_WINDOW_MONTHS - 1),
            DatePreset::AllTime => self.min_month.first_day(),
        };
        DateRange { start, end }
    }

    /// Earliest date a user may pick
    pub fn min_selectable(&self) -> NaiveDate {
        self.min_month.first_day()
    }

    /// The preset whose resolved range is exactly `start..=end`, if any
    pub fn matching_preset(&self, start_date: &str, end_date: &str) -> Option<DatePreset> {
        DatePreset::ALL.into_iter().find(|preset| {
            let range = self.resolve(*preset);
            range.start_iso() == start_date && range.end_iso() == end_date
        })
    }
}

/// Editable start/end pair behind the date range picker.
///
/// Every method that can complete a range returns the resulting
/// `RangeChange`; `None` means the caller must not be notified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    start_date: String,
    end_date: String,
    auto_selected: bool,
}

impl DateRangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Whether either field holds a value
    pub fn has_selection(&self) -> bool {
        !self.start_date.is_empty() || !self.end_date.is_empty()
    }

    /// Called whenever bounds are (re)delivered.
    ///
    /// The first time bounds arrive with nothing selected, selects the full
    /// range and reports it. Later refreshes never report again, even if the
    /// caller reacts to the notification by refetching the bounds.
    pub fn sync_bounds(&mut self, bounds: Option<&DateBounds>) -> Option<RangeChange> {
        let bounds = bounds?;
        if self.auto_selected || self.has_selection() {
            return None;
        }

        self.auto_selected = true;
        debug!("Auto-selecting full range {} to {}", bounds.min_month, bounds.latest_month);
        Some(self.select(bounds.resolve(DatePreset::AllTime)))
    }

    pub fn apply_preset(&mut self, bounds: &DateBounds, preset: DatePreset) -> RangeChange {
        self.select(bounds.resolve(preset))
    }

    /// Store a manually entered start date. Reports only once both fields are set.
    pub fn set_start_date(&mut self, value: impl Into<String>) -> Option<RangeChange> {
        self.start_date = value.into();
        self.completed_pair()
    }

    /// Store a manually entered end date. Reports only once both fields are set.
    /// No ordering check is made against the start date.
    pub fn set_end_date(&mut self, value: impl Into<String>) -> Option<RangeChange> {
        self.end_date = value.into();
        self.completed_pair()
    }

    fn select(&mut self, range: DateRange) -> RangeChange {
        let change = RangeChange::from(range);
        self.start_date = change.start_date.clone();
        self.end_date = change.end_date.clone();
        change
    }

    fn completed_pair(&self) -> Option<RangeChange> {
        if self.start_date.is_empty() || self.end_date.is_empty() {
            return None;
        }
        Some(RangeChange {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(s: &str) -> MonthBound {
        s.parse().unwrap()
    }

    fn bounds(min: &str, latest: &str) -> DateBounds {
        DateBounds::new(month(min), month(latest))
    }

    #[test]
    fn test_month_end_non_leap_year() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (index, last_day) in expected.iter().enumerate() {
            let m = index as u32 + 1;
            assert_eq!(month_end(2023, m), Some(date(2023, m, *last_day)), "month {}", m);
        }
    }

    #[test]
    fn test_month_end_leap_february() {
        assert_eq!(month_end(2024, 2), Some(date(2024, 2, 29)));
        assert_eq!(month_end(2023, 2), Some(date(2023, 2, 28)));
        assert_eq!(month_end(2000, 2), Some(date(2000, 2, 29)));
        assert_eq!(month_end(1900, 2), Some(date(1900, 2, 28)));
    }

    #[test]
    fn test_month_end_invalid_month() {
        assert_eq!(month_end(2024, 0), None);
        assert_eq!(month_end(2024, 13), None);
    }

    #[test]
    fn test_parse_month_bound() {
        let bound = month("2024-06");
        assert_eq!(bound.year(), 2024);
        assert_eq!(bound.month(), 6);
        assert_eq!(bound.to_string(), "2024-06");

        assert!("2024-6".parse::<MonthBound>().is_err());
        assert!("2024".parse::<MonthBound>().is_err());
        assert!("24-06".parse::<MonthBound>().is_err());
        assert!("2024-06-01".parse::<MonthBound>().is_err());
        assert_eq!(
            "2024-13".parse::<MonthBound>(),
            Err(MonthBoundParseError::MonthOutOfRange(13))
        );
        assert_eq!(
            "0000-01".parse::<MonthBound>(),
            Err(MonthBoundParseError::YearOutOfRange(0))
        );
    }

    #[test]
    fn test_month_bound_serde() {
        let bound: MonthBound = serde_json::from_str("\"2020-03\"").unwrap();
        assert_eq!(bound, month("2020-03"));
        assert_eq!(serde_json::to_string(&bound).unwrap(), "\"2020-03\"");
        assert!(serde_json::from_str::<MonthBound>("\"March 2020\"").is_err());
    }

    #[test]
    fn test_presets_resolve() {
        let b = bounds("2020-03", "2024-06");

        let ytd = b.resolve(DatePreset::YearToDate);
        assert_eq!((ytd.start, ytd.end), (date(2024, 1, 1), date(2024, 6, 30)));

        let last_12 = b.resolve(DatePreset::Last12Months);
        assert_eq!((last_12.start, last_12.end), (date(2023, 7, 1), date(2024, 6, 30)));

        let all = b.resolve(DatePreset::AllTime);
        assert_eq!((all.start, all.end), (date(2020, 3, 1), date(2024, 6, 30)));
    }

    #[test]
    fn test_last_12_months_rolls_over_year() {
        let b = bounds("2020-03", "2024-03");
        let range = b.resolve(DatePreset::Last12Months);
        assert_eq!(range.start, date(2023, 4, 1));
        assert_eq!(range.end, date(2024, 3, 31));

        let december = bounds("2020-03", "2023-12");
        assert_eq!(december.resolve(DatePreset::Last12Months).start, date(2023, 1, 1));
    }

    #[test]
    fn test_year_to_date_in_january() {
        let b = bounds("2020-03", "2024-01");
        let range = b.resolve(DatePreset::YearToDate);
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 1, 31));
    }

    #[test]
    fn test_presets_end_on_leap_day() {
        let b = bounds("2020-03", "2024-02");
        for preset in DatePreset::ALL {
            assert_eq!(b.resolve(preset).end, date(2024, 2, 29));
        }
    }

    #[test]
    fn test_min_selectable_is_first_day_of_min_month() {
        assert_eq!(bounds("2020-03", "2024-06").min_selectable(), date(2020, 3, 1));
        assert_eq!(bounds("2019-12", "2024-06").min_selectable(), date(2019, 12, 1));
    }

    #[test]
    fn test_bounds_from_available() {
        let available = AvailableMonthsResponse {
            min_month: Some("2020-03".to_string()),
            latest_with_data: Some("2024-06".to_string()),
            months_count: Some(52),
        };
        assert_eq!(DateBounds::from_available(&available), Some(bounds("2020-03", "2024-06")));

        let missing_min = AvailableMonthsResponse {
            min_month: None,
            ..available.clone()
        };
        assert_eq!(DateBounds::from_available(&missing_min), None);

        let malformed = AvailableMonthsResponse {
            latest_with_data: Some("June".to_string()),
            ..available
        };
        assert_eq!(DateBounds::from_available(&malformed), None);
    }

    #[test]
    fn test_matching_preset() {
        let b = bounds("2020-03", "2024-06");
        assert_eq!(b.matching_preset("2024-01-01", "2024-06-30"), Some(DatePreset::YearToDate));
        assert_eq!(b.matching_preset("2023-07-01", "2024-06-30"), Some(DatePreset::Last12Months));
        assert_eq!(b.matching_preset("2020-03-01", "2024-06-30"), Some(DatePreset::AllTime));
        assert_eq!(b.matching_preset("2024-02-01", "2024-06-30"), None);
    }

    #[test]
    fn test_auto_selection_fires_once() {
        let b = bounds("2020-03", "2024-06");
        let mut selection = DateRangeSelection::new();

        assert_eq!(selection.sync_bounds(None), None);

        let change = selection.sync_bounds(Some(&b)).unwrap();
        assert_eq!(change.start_date, "2020-03-01");
        assert_eq!(change.end_date, "2024-06-30");
        assert_eq!(selection.start_date(), "2020-03-01");

        // Refreshed bounds must not re-trigger a notification
        let refreshed = bounds("2019-01", "2024-07");
        assert_eq!(selection.sync_bounds(Some(&refreshed)), None);
        assert_eq!(selection.sync_bounds(Some(&b)), None);
        assert_eq!(selection.end_date(), "2024-06-30");
    }

    #[test]
    fn test_auto_selection_skipped_when_range_exists() {
        let b = bounds("2020-03", "2024-06");
        let mut selection = DateRangeSelection::new();
        selection.apply_preset(&b, DatePreset::YearToDate);

        assert_eq!(selection.sync_bounds(Some(&b)), None);
        assert_eq!(selection.start_date(), "2024-01-01");
    }

    #[test]
    fn test_manual_start_alone_does_not_notify() {
        let mut selection = DateRangeSelection::new();
        assert_eq!(selection.set_start_date("2024-05-01"), None);

        let change = selection.set_end_date("2024-05-31").unwrap();
        assert_eq!(change.start_date, "2024-05-01");
        assert_eq!(change.end_date, "2024-05-31");
    }

    #[test]
    fn test_manual_edit_is_not_validated() {
        let mut selection = DateRangeSelection::new();
        assert_eq!(selection.set_start_date("2024-06-15"), None);

        // End before start is forwarded verbatim
        let change = selection.set_end_date("2024-01-02").unwrap();
        assert_eq!(change.start_date, "2024-06-15");
        assert_eq!(change.end_date, "2024-01-02");
    }

    #[test]
    fn test_manual_edit_after_preset_notifies_immediately() {
        let b = bounds("2020-03", "2024-06");
        let mut selection = DateRangeSelection::new();
        selection.sync_bounds(Some(&b));

        let change = selection.set_start_date("2022-01-01").unwrap();
        assert_eq!(change.start_date, "2022-01-01");
        assert_eq!(change.end_date, "2024-06-30");

        // Clearing a field suppresses the notification
        assert_eq!(selection.set_end_date(""), None);
    }

    #[test]
    fn test_repeated_preset_clicks_are_stable() {
        let b = bounds("2020-03", "2024-06");
        let mut selection = DateRangeSelection::new();
        let first = selection.apply_preset(&b, DatePreset::Last12Months);
        let second = selection.apply_preset(&b, DatePreset::Last12Months);
        assert_eq!(first, second);
        assert_eq!(selection.start_date(), "2023-07-01");
    }
}
