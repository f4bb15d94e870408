use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{AvailableMonthsResponse, DateBounds};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "available-months-hook";

#[derive(Clone, PartialEq, Default)]
pub struct AvailableMonthsState {
    pub months: Option<AvailableMonthsResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AvailableMonthsState {
    /// Usable bounds, or `None` while loading or when the payload has no usable months
    pub fn bounds(&self) -> Option<DateBounds> {
        self.months.as_ref().and_then(DateBounds::from_available)
    }
}

/// Numbers requests so only the most recent one may write its response
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

impl RequestTracker {
    /// Start a new request; every earlier id becomes stale
    pub fn begin(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.get() == id
    }
}

/// Hook for the range of months that have transaction data.
///
/// Refetches whenever `refresh_trigger` changes. The previous payload stays
/// visible while a refresh is in flight. Responses that arrive after a newer
/// request has started are dropped.
#[hook]
pub fn use_available_months(api_client: &ApiClient, refresh_trigger: u32) -> UseStateHandle<AvailableMonthsState> {
    let months_state = use_state(|| AvailableMonthsState {
        loading: true,
        ..AvailableMonthsState::default()
    });
    let tracker = use_memo((), |_| RequestTracker::default());

    use_effect_with(refresh_trigger, {
        let months_state = months_state.clone();
        let api_client = api_client.clone();
        let tracker = Rc::clone(&tracker);
        move |_| {
            let request_id = tracker.begin();
            months_state.set(AvailableMonthsState {
                loading: true,
                ..(*months_state).clone()
            });

            spawn_local(async move {
                let result = api_client.get_available_months().await;
                if !tracker.is_current(request_id) {
                    Logger::debug_with_component(
                        COMPONENT,
                        &format!("Dropping stale response for request {}", request_id),
                    );
                    return;
                }

                match result {
                    Ok(response) => {
                        months_state.set(AvailableMonthsState {
                            months: Some(response),
                            loading: false,
                            error: None,
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &e);
                        months_state.set(AvailableMonthsState {
                            months: (*months_state).months.clone(),
                            loading: false,
                            error: Some(e),
                        });
                    }
                }
            });

            || ()
        }
    });

    months_state
}
