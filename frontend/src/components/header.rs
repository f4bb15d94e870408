use yew::prelude::*;
use crate::hooks::use_app_mode::use_app_mode;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_refresh: Callback<()>,
    pub refreshing: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let mode_state = use_app_mode();

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>
                    {"Budget Tracker"}
                    {if mode_state.is_demo() {
                        html! { <span class="mode-badge">{"Demo"}</span> }
                    } else { html! {} }}
                </h1>
                <div class="header-right">
                    <button
                        type="button"
                        class="refresh-button"
                        onclick={on_refresh_click}
                        disabled={props.refreshing}
                    >
                        {if props.refreshing { "Refreshing..." } else { "Refresh data" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
