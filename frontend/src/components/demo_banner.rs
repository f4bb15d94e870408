use yew::prelude::*;
use crate::hooks::use_app_mode::use_mode_state;

/// Informational strip shown while the backend serves sample data.
/// Renders nothing until the mode is known or when the backend hides it.
#[function_component(DemoBanner)]
pub fn demo_banner() -> Html {
    let mode_state = use_mode_state();

    match mode_state.banner_message() {
        Some(message) => html! {
            <div class="demo-banner" role="status">
                <span class="demo-banner-message">{message.to_string()}</span>
            </div>
        },
        None => html! {},
    }
}
