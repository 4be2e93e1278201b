use crate::shared::icons::icon;
use contracts::shared::format::format_money;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
        }
    }
}

/// Headline money figure with an icon.
#[component]
pub fn StatCard(
    label: &'static str,
    /// Name understood by [`icon`]
    icon_name: &'static str,
    /// `None` while loading
    #[prop(into)]
    value: Signal<Option<f64>>,
    #[prop(optional)] tone: StatTone,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle
            .get()
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
