use serde::{Deserialize, Serialize};

pub mod date_range;
pub mod mode;

pub use date_range::{
    month_end, DateBounds, DatePreset, DateRange, DateRangeSelection, MonthBound,
    MonthBoundParseError, RangeChange,
};
pub use mode::{
    AppMode, DemoConfig, Feature, FeatureFlags, ModeError, ModeSession, ModeState, ModeStatus,
    SystemModeResponse, DEFAULT_BANNER_MESSAGE,
};

/// Response body of `GET /api/analytics/available-months`.
///
/// The backend sends several aliases for the same months; only the fields the
/// dashboard uses are kept. Both months are optional so an empty ledger still
/// deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableMonthsResponse {
    /// Earliest month with transactions (YYYY-MM)
    pub min_month: Option<String>,
    /// Most recent month with transactions (YYYY-MM)
    pub latest_with_data: Option<String>,
    /// Inclusive number of months between the two
    pub months_count: Option<u32>,
}
