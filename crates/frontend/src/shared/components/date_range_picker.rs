use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{month_range_iso, previous_month, today, today_iso, ISO_DATE};

const MONTHS: [(u32, &str); 12] = [
    (1, "Ene"),
    (2, "Feb"),
    (3, "Mar"),
    (4, "Abr"),
    (5, "May"),
    (6, "Jun"),
    (7, "Jul"),
    (8, "Ago"),
    (9, "Sep"),
    (10, "Oct"),
    (11, "Nov"),
    (12, "Dic"),
];

/// Two date inputs plus quick presets: today, previous month, current month
/// and a month/year dialog.
#[component]
pub fn DateRangePicker(
    /// Start date, `yyyy-mm-dd`
    #[prop(into)]
    date_from: Signal<String>,

    /// End date, `yyyy-mm-dd`
    #[prop(into)]
    date_to: Signal<String>,

    /// Fired with `(from, to)` on every change
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let show_picker = RwSignal::new(false);
    let selected_month = RwSignal::new(today().month().to_string());
    let selected_year = RwSignal::new(today().year().to_string());

    let emit_month = move |year: i32, month: u32| {
        if let Some(range) = month_range_iso(year, month) {
            on_change.run(range);
        }
    };

    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    let on_today = move |_| {
        let today = today_iso();
        on_change.run((today.clone(), today));
    };

    let on_current_month = move |_| {
        let now = today();
        emit_month(now.year(), now.month());
    };

    // Steps back from the currently selected start date.
    let on_previous_month = move |_| {
        let current_from = date_from.get_untracked();
        let anchor = NaiveDate::parse_from_str(&current_from, ISO_DATE).unwrap_or_else(|_| today());
        let (year, month) = previous_month(anchor);
        emit_month(year, month);
    };

    let on_apply_custom = move |_| {
        if let (Ok(year), Ok(month)) = (
            selected_year.get().parse::<i32>(),
            selected_month.get().parse::<u32>(),
        ) {
            emit_month(year, month);
        }
        show_picker.set(false);
    };

    let current_year = today().year();

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| on_from_change(event_target_value(&ev))
                />

                <div>"—"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| on_to_change(event_target_value(&ev))
                />

                <div class="date-range-picker-compact">
                    <ButtonGroup>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_today
                        >
                            "Hoy"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_previous_month
                        >
                            "-1M"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_current_month
                        >
                            "0M"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| show_picker.set(true)
                        >
                            "⋯"
                        </Button>
                    </ButtonGroup>
                </div>
            </Flex>
        </Flex>

        <Dialog open=show_picker>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Seleccione mes y año"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Large>
                            <div>
                                <div class="date-range-picker__section">"Mes:"</div>
                                <div class="date-range-picker__months">
                                    {MONTHS
                                        .into_iter()
                                        .map(|(month_num, month_name)| {
                                            let is_selected = move || {
                                                selected_month.get() == month_num.to_string()
                                            };
                                            view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=move || {
                                                        if is_selected() {
                                                            ButtonAppearance::Primary
                                                        } else {
                                                            ButtonAppearance::Subtle
                                                        }
                                                    }
                                                    on_click=move |_| selected_month.set(month_num.to_string())
                                                    attr:style="width: 100%;"
                                                >
                                                    {month_name}
                                                </Button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div>
                                <div class="date-range-picker__section">"Año:"</div>
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| selected_year.set((current_year - 1).to_string())
                                    >
                                        {(current_year - 1).to_string()}
                                    </Button>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| selected_year.set(current_year.to_string())
                                    >
                                        {current_year.to_string()}
                                    </Button>
                                    <Input
                                        input_type=InputType::Number
                                        value=selected_year
                                        attr:style="flex: 1;"
                                    />
                                </Flex>
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=on_apply_custom>
                            "Aplicar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| show_picker.set(false)
                        >
                            "Cancelar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
