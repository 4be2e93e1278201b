use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Mounted once per open tab; hidden with `tabs__item--hidden` while inactive.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key);
    let is_active =
        move || tabs_store.active.with(|active| active.as_deref() == Some(key.get_value().as_str()));

    log::debug!("tab page mounted: {}", key.get_value());
    on_cleanup(move || log::debug!("tab page dropped: {}", key.get_value()));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=key.get_value()
        >
            {render_tab_content(&key.get_value())}
        </div>
    }
}
