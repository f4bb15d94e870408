pub mod dashboard;
pub mod dashboard_card;
pub mod date_range_picker;
pub mod demo_banner;
pub mod header;
