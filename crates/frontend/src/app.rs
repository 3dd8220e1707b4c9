use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::HttpApi;
use crate::shared::config::AppConfig;
use crate::shared::notification::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("Backend at {}", config.api.base_url);
    provide_context(HttpApi::new(config.api.base_url.clone()));
    provide_context(config);
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
        <NotificationHost />
    }
}
