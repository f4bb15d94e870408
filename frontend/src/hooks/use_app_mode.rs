use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{ModeSession, ModeState};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "mode-provider";

#[derive(Properties, PartialEq)]
pub struct ModeProviderProps {
    pub api_client: ApiClient,
    #[prop_or_default]
    pub children: Html,
}

/// Fetches the application mode once and shares it with every descendant.
///
/// Descendants see the loading defaults until the fetch settles. A failed
/// fetch leaves the defaults in place with `error` set.
#[function_component(ModeProvider)]
pub fn mode_provider(props: &ModeProviderProps) -> Html {
    let mode_state = use_state(ModeState::default);

    // No dependencies, so this runs once per mounted provider
    {
        let mode_state = mode_state.clone();
        let api_client = props.api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let mut session = ModeSession::new();
                match session.initialize(move || async move { api_client.get_system_mode().await }).await {
                    Ok(state) => Logger::info_with_component(
                        COMPONENT,
                        &format!("Running in {} mode", state.mode.as_str()),
                    ),
                    Err(e) => Logger::warn_with_component(
                        COMPONENT,
                        &format!("Using default mode and features: {}", e),
                    ),
                }
                mode_state.set(session.into_state());
            });
            || ()
        });
    }

    html! {
        <ContextProvider<ModeState> context={(*mode_state).clone()}>
            { props.children.clone() }
        </ContextProvider<ModeState>>
    }
}

/// Mode state from the nearest `ModeProvider`, or the loading defaults when
/// there is none.
#[hook]
pub fn use_mode_state() -> ModeState {
    use_context::<ModeState>().unwrap_or_default()
}

/// Mode state from the nearest `ModeProvider`.
///
/// # Panics
///
/// Panics when no `ModeProvider` is mounted above the caller. This is an
/// integration mistake, so it fails loudly in every build profile.
#[hook]
pub fn use_app_mode() -> ModeState {
    require_app_mode(use_context::<ModeState>())
}

/// Unwraps a `ModeState` context lookup, panicking when it is missing
pub fn require_app_mode(context: Option<ModeState>) -> ModeState {
    match ModeState::require(context) {
        Ok(state) => state,
        Err(e) => {
            Logger::error_with_component(COMPONENT, &e.to_string());
            panic!("{}", e)
        }
    }
}
