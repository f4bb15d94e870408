use log::Level;

/// Backend the dashboard talks to when no override is baked into the build
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Frontend settings resolved at build time.
///
/// * `BUDGET_API_BASE_URL` - backend origin, without a trailing slash
/// * `BUDGET_LOG_LEVEL` - `debug`, `info`, `warn` or `error`
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
        }
    }
}

impl FrontendConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("BUDGET_API_BASE_URL"), option_env!("BUDGET_LOG_LEVEL"))
    }

    /// Blank or unparseable values fall back to the defaults
    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base_url);

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            log_level,
        }
    }
}
