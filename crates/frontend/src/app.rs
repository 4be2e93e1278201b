use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Build-time override of the API base URL (`API_URL=... trunk build`).
const API_URL_OVERRIDE: Option<&str> = option_env!("API_URL");

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load(API_URL_OVERRIDE).unwrap_or_else(|e| {
        log::error!("Invalid configuration, using defaults: {:#}", e);
        AppConfig::default()
    });
    log::info!("API base URL: {}", config.api_base_url());

    // Every API call in the app goes through this client.
    provide_context(ApiClient::new(&config));

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
