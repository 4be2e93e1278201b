use leptos::prelude::*;

/// Native date input; the browser renders the value in the user's locale.
#[component]
pub fn DateInput(
    /// `yyyy-mm-dd`
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new value as `yyyy-mm-dd`
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] max: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            prop:value=value
            max=max
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
