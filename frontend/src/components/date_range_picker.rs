use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::{DateBounds, DatePreset, DateRangeSelection, RangeChange};
use crate::services::date_utils::{format_month_for_display, to_input_value, today};
use crate::services::logging::Logger;

const COMPONENT: &str = "date-range-picker";

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    /// Months with data, or None while they are still loading
    pub bounds: Option<DateBounds>,
    /// Called with every resolved range: the initial full range, preset clicks,
    /// and manual edits once both dates are filled in
    pub on_range_change: Callback<RangeChange>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    // Kept in a ref so quick successive events always see the latest edit
    let selection = use_mut_ref(DateRangeSelection::new);
    let force_update = use_force_update();

    // Select the full range the first time bounds arrive
    {
        let selection = selection.clone();
        let on_range_change = props.on_range_change.clone();
        let force_update = force_update.clone();
        use_effect_with(props.bounds, move |bounds| {
            let change = selection.borrow_mut().sync_bounds(bounds.as_ref());
            if let Some(change) = change {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Initial range {} to {}", change.start_date, change.end_date),
                );
                force_update.force_update();
                on_range_change.emit(change);
            }
            || ()
        });
    }

    let Some(bounds) = props.bounds else {
        return html! {
            <div class="date-range-picker loading">
                <span class="loading-text">{"Loading available dates..."}</span>
            </div>
        };
    };

    let on_preset = {
        let selection = selection.clone();
        let on_range_change = props.on_range_change.clone();
        let force_update = force_update.clone();
        Callback::from(move |preset: DatePreset| {
            let change = selection.borrow_mut().apply_preset(&bounds, preset);
            Logger::debug_with_component(COMPONENT, &format!("Preset selected: {}", preset.label()));
            force_update.force_update();
            on_range_change.emit(change);
        })
    };

    let on_start_change = {
        let selection = selection.clone();
        let on_range_change = props.on_range_change.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let change = selection.borrow_mut().set_start_date(input.value());
            force_update.force_update();
            if let Some(change) = change {
                on_range_change.emit(change);
            }
        })
    };

    let on_end_change = {
        let selection = selection.clone();
        let on_range_change = props.on_range_change.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let change = selection.borrow_mut().set_end_date(input.value());
            force_update.force_update();
            if let Some(change) = change {
                on_range_change.emit(change);
            }
        })
    };

    let (start_date, end_date) = {
        let current = selection.borrow();
        (current.start_date().to_string(), current.end_date().to_string())
    };
    let active_preset = bounds.matching_preset(&start_date, &end_date);
    let min_date = to_input_value(bounds.min_selectable());
    // Manual picks may run past the latest month with data, up to today
    let max_date = to_input_value(today());

    html! {
        <div class="date-range-picker">
            <div class="preset-buttons">
                {for DatePreset::ALL.iter().map(|preset| {
                    let preset = *preset;
                    let on_preset = on_preset.clone();
                    html! {
                        <button
                            type="button"
                            class={classes!("preset-button", (active_preset == Some(preset)).then(|| "active"))}
                            disabled={props.disabled}
                            onclick={Callback::from(move |_: MouseEvent| on_preset.emit(preset))}
                        >
                            {preset.label()}
                        </button>
                    }
                })}
            </div>

            <div class="date-inputs">
                <label class="date-input-label">
                    {"From"}
                    <input
                        type="date"
                        class="date-input"
                        value={start_date}
                        min={min_date.clone()}
                        max={max_date.clone()}
                        disabled={props.disabled}
                        onchange={on_start_change}
                    />
                </label>
                <label class="date-input-label">
                    {"To"}
                    <input
                        type="date"
                        class="date-input"
                        value={end_date}
                        min={min_date}
                        max={max_date}
                        disabled={props.disabled}
                        onchange={on_end_change}
                    />
                </label>
            </div>

            <p class="date-range-hint">
                {format!(
                    "Data available from {} through {}",
                    format_month_for_display(&bounds.min_month),
                    format_month_for_display(&bounds.latest_month),
                )}
            </p>
        </div>
    }
}
