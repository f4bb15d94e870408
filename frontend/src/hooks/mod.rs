pub mod use_app_mode;
pub mod use_available_months;
