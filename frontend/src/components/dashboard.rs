use yew::prelude::*;
use shared::{Feature, ModeStatus, RangeChange};
use super::dashboard_card::DashboardCard;
use super::date_range_picker::DateRangePicker;
use super::demo_banner::DemoBanner;
use super::header::Header;
use crate::hooks::use_app_mode::use_app_mode;
use crate::hooks::use_available_months::use_available_months;
use crate::services::api::ApiClient;
use crate::services::date_utils::{format_month_for_display, format_range_for_display};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api_client: ApiClient,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let mode_state = use_app_mode();
    let refresh_trigger = use_state(|| 0u32);
    let available_months = use_available_months(&props.api_client, *refresh_trigger);
    let selected_range = use_state(|| Option::<RangeChange>::None);

    let bounds = available_months.bounds();

    let on_range_change = {
        let selected_range = selected_range.clone();
        Callback::from(move |change: RangeChange| {
            Logger::info_with_component(
                "dashboard",
                &format!("Selected period {} to {}", change.start_date, change.end_date),
            );
            selected_range.set(Some(change));
        })
    };

    let on_refresh = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_: ()| refresh_trigger.set(*refresh_trigger + 1))
    };

    let (period_value, period_caption) = match &*selected_range {
        Some(range) => {
            let caption = bounds
                .and_then(|b| b.matching_preset(&range.start_date, &range.end_date))
                .map(|preset| preset.label())
                .unwrap_or("Custom range");
            (format_range_for_display(&range.start_date, &range.end_date), caption)
        }
        None => ("No period selected".to_string(), "Waiting for data"),
    };

    let coverage_value = available_months
        .months
        .as_ref()
        .and_then(|months| months.months_count)
        .map(|count| format!("{} months", count))
        .unwrap_or_else(|| "-".to_string());
    let coverage_caption = match (bounds, &available_months.error) {
        (_, Some(error)) => error.clone(),
        (Some(b), None) => format!(
            "{} to {}",
            format_month_for_display(&b.min_month),
            format_month_for_display(&b.latest_month)
        ),
        (None, None) if available_months.loading => "Loading...".to_string(),
        (None, None) => "No transactions yet".to_string(),
    };

    let enabled_count = mode_state.features.enabled().count();
    let features_caption = match mode_state.status() {
        ModeStatus::Loading => "Checking features...".to_string(),
        ModeStatus::Ready => format!("Running in {} mode", mode_state.mode.as_str()),
        ModeStatus::Failed(error) => format!("Using defaults ({})", error),
    };

    html! {
        <div class="app">
            <Header on_refresh={on_refresh} refreshing={available_months.loading} />
            <DemoBanner />

            <main class="main">
                <div class="container">
                    <DateRangePicker bounds={bounds} on_range_change={on_range_change} />

                    <div class="dashboard-cards">
                        <DashboardCard
                            title="Selected period"
                            value={period_value}
                            caption={Some(AttrValue::from(period_caption))}
                        />
                        <DashboardCard
                            title="Data coverage"
                            value={coverage_value}
                            caption={Some(AttrValue::from(coverage_caption))}
                        />
                        <DashboardCard
                            title="Features"
                            value={format!("{}/{} enabled", enabled_count, Feature::ALL.len())}
                            caption={Some(AttrValue::from(features_caption))}
                        >
                            <ul class="feature-list">
                                {for Feature::ALL.iter().map(|feature| {
                                    let enabled = mode_state.is_feature_enabled(*feature);
                                    html! {
                                        <li class={classes!("feature-chip", if enabled { "enabled" } else { "disabled" })}>
                                            {feature.label()}
                                        </li>
                                    }
                                })}
                            </ul>
                        </DashboardCard>
                    </div>
                </div>
            </main>
        </div>
    }
}
