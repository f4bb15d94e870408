use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::dashboard::Dashboard;
use hooks::use_app_mode::ModeProvider;
use services::api::ApiClient;
use services::config::FrontendConfig;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_state(ApiClient::new);

    html! {
        <ModeProvider api_client={(*api_client).clone()}>
            <Dashboard api_client={(*api_client).clone()} />
        </ModeProvider>
    }
}

fn main() {
    let config = FrontendConfig::from_build_env();
    Logger::init(config.log_level);
    Logger::info_with_component("app", &format!("Starting dashboard against {}", config.api_base_url));

    yew::Renderer::<App>::new().render();
}
