use std::future::Future;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Banner text used when the backend asks for the banner without sending a message
pub const DEFAULT_BANNER_MESSAGE: &str = "Demo Mode - Viewing sample data";

/// Presentation mode declared by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    #[default]
    Production,
    Demo,
}

impl AppMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::Production => "production",
            AppMode::Demo => "demo",
        }
    }
}

/// Feature switches served by `/api/system/mode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub plaid_enabled: bool,
    pub excel_import_enabled: bool,
    pub excel_export_enabled: bool,
    pub manual_entry_enabled: bool,
    pub mapping_studio_enabled: bool,
    pub category_management_enabled: bool,
}

impl Default for FeatureFlags {
    /// Everything enabled, so a failed fetch degrades to the full production app
    fn default() -> Self {
        Self {
            plaid_enabled: true,
            excel_import_enabled: true,
            excel_export_enabled: true,
            manual_entry_enabled: true,
            mapping_studio_enabled: true,
            category_management_enabled: true,
        }
    }
}

impl FeatureFlags {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Plaid => self.plaid_enabled,
            Feature::ExcelImport => self.excel_import_enabled,
            Feature::ExcelExport => self.excel_export_enabled,
            Feature::ManualEntry => self.manual_entry_enabled,
            Feature::MappingStudio => self.mapping_studio_enabled,
            Feature::CategoryManagement => self.category_management_enabled,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|feature| self.is_enabled(*feature))
    }
}

/// Names for each flag in `FeatureFlags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Plaid,
    ExcelImport,
    ExcelExport,
    ManualEntry,
    MappingStudio,
    CategoryManagement,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Plaid,
        Feature::ExcelImport,
        Feature::ExcelExport,
        Feature::ManualEntry,
        Feature::MappingStudio,
        Feature::CategoryManagement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Plaid => "Bank sync",
            Feature::ExcelImport => "Excel import",
            Feature::ExcelExport => "Excel export",
            Feature::ManualEntry => "Manual entry",
            Feature::MappingStudio => "Mapping studio",
            Feature::CategoryManagement => "Categories",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub show_banner: bool,
    pub banner_message: Option<String>,
}

/// Response body of `GET /api/system/mode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemModeResponse {
    pub mode: AppMode,
    pub features: FeatureFlags,
    pub demo_config: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Mode request failed with status {0}")]
    Status(u16),
    #[error("Failed to parse mode response: {0}")]
    Decode(String),
    #[error("use_app_mode must be called inside a ModeProvider")]
    OutsideProvider,
}

/// Where the mode fetch currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Mode and feature-flag state shared with the component tree.
///
/// The default value is the loading state: production mode, every feature
/// enabled, banner hidden. Consumers may render with it but should treat it as
/// provisional while `is_loading` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeState {
    pub mode: AppMode,
    pub features: FeatureFlags,
    pub demo_config: DemoConfig,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: AppMode::default(),
            features: FeatureFlags::default(),
            demo_config: DemoConfig::default(),
            is_loading: true,
            error: None,
        }
    }
}

impl ModeState {
    pub fn ready(response: SystemModeResponse) -> Self {
        Self {
            mode: response.mode,
            features: response.features,
            demo_config: response.demo_config,
            is_loading: false,
            error: None,
        }
    }

    /// Defaults with the loading flag cleared and the error recorded
    pub fn failed(error: &ModeError) -> Self {
        Self {
            is_loading: false,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn from_fetch(result: Result<SystemModeResponse, ModeError>) -> Self {
        match result {
            Ok(response) => Self::ready(response),
            Err(e) => Self::failed(&e),
        }
    }

    /// Unwrap a context lookup, rejecting callers wired outside any provider
    pub fn require(context: Option<Self>) -> Result<Self, ModeError> {
        context.ok_or(ModeError::OutsideProvider)
    }

    pub fn status(&self) -> ModeStatus {
        match (&self.error, self.is_loading) {
            (_, true) => ModeStatus::Loading,
            (Some(message), false) => ModeStatus::Failed(message.clone()),
            (None, false) => ModeStatus::Ready,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.mode == AppMode::Demo
    }

    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        self.features.is_enabled(feature)
    }

    /// Text for the demo banner, or `None` when no banner should be shown
    pub fn banner_message(&self) -> Option<&str> {
        if self.is_loading || !self.demo_config.show_banner {
            return None;
        }
        Some(
            self.demo_config
                .banner_message
                .as_deref()
                .unwrap_or(DEFAULT_BANNER_MESSAGE),
        )
    }
}

/// One application session's view of the mode endpoint.
///
/// `initialize` performs the single fetch of the session. Later calls replay
/// the stored outcome without fetching again; there is no retry or refresh.
#[derive(Debug, Default)]
pub struct ModeSession {
    state: ModeState,
    outcome: Option<Result<(), ModeError>>,
}

impl ModeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn into_state(self) -> ModeState {
        self.state
    }

    pub fn has_fetched(&self) -> bool {
        self.outcome.is_some()
    }

    pub async fn initialize<F, Fut>(&mut self, fetch: F) -> Result<&ModeState, ModeError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SystemModeResponse, ModeError>>,
    {
        if let Some(outcome) = &self.outcome {
            debug!("Mode already fetched for this session, skipping request");
            return outcome.clone().map(|()| &self.state);
        }

        let outcome = match fetch().await {
            Ok(response) => {
                info!(
                    "Application mode resolved: {} (banner: {})",
                    response.mode.as_str(),
                    response.demo_config.show_banner
                );
                self.state = ModeState::ready(response);
                Ok(())
            }
            Err(e) => {
                warn!("Falling back to default mode, fetch failed: {}", e);
                self.state = ModeState::failed(&e);
                Err(e)
            }
        };

        self.outcome = Some(outcome.clone());
        outcome.map(|()| &self.state)
    }
}
