//! Per-order payment controls: register an installment or override the
//! stored status by hand.

use contracts::domain::a001_pedido::payment::{
    parse_abono, plan_abono, PagoUpdate, MANUAL_OVERRIDE_LABEL,
};
use contracts::domain::a001_pedido::{EstadoPago, Pedido};
use contracts::shared::format::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_pedido::api;
use crate::shared::api_utils::{use_api, AbortOnCleanup};
use crate::shared::components::{ConfirmDialog, EstadoPagoBadge};

#[component]
pub fn PagoManager(
    pedido: Pedido,
    /// Receives the success message; the parent re-fetches its list.
    on_success: Callback<String>,
) -> impl IntoView {
    let api = use_api();
    let abort = AbortOnCleanup::new();

    let pedido = StoredValue::new(pedido);
    let estado = RwSignal::new(pedido.with_value(Pedido::estado_pago));
    let saldo = pedido.with_value(Pedido::saldo);

    let monto_input = RwSignal::new(String::new());
    let parsed = Memo::new(move |_| parse_abono(&monto_input.get()));

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let manual_select = RwSignal::new(estado.get_untracked().as_str().to_string());
    let confirm_open = RwSignal::new(false);

    let send_update = StoredValue::new(move |update: PagoUpdate, message: &'static str| {
        let api = api.clone();
        let id = pedido.with_value(|p| p.id.clone());
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let signal = abort.signal();
            match api::update_pago(&api, &id, &update, signal.as_ref()).await {
                Ok(()) => {
                    log::info!("Pedido {}: pago -> {}", id, update.pago);
                    estado.set(update.pago);
                    monto_input.set(String::new());
                    set_saving.set(false);
                    on_success.run(message.to_string());
                }
                Err(e) if e.is_aborted() => {}
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    });

    let on_abonar = move |_| {
        let Ok(monto) = parsed.get_untracked() else {
            return;
        };
        let plan = pedido.with_value(|p| plan_abono(p, monto));
        log::debug!(
            "Abono {} -> pagado {} de {} ({})",
            plan.monto,
            plan.pagado_despues,
            plan.total,
            plan.estado
        );
        send_update.with_value(|send| send(plan.update(), "Abono registrado"));
    };

    let on_confirm_manual = Callback::new(move |_| {
        match manual_select.get_untracked().parse::<EstadoPago>() {
            Ok(nuevo) => {
                send_update.with_value(|send| send(PagoUpdate::manual(nuevo), "Estado actualizado"))
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    let abonar_disabled = Signal::derive(move || saving.get() || parsed.with(|p| p.is_err()));

    let validation_hint = move || {
        let input = monto_input.get();
        if input.trim().is_empty() {
            return None;
        }
        parsed.get().err().map(|e| e.to_string())
    };

    view! {
        <div class="pago-manager">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <EstadoPagoBadge estado=estado />
                <span class="pago-manager__saldo" title="Saldo pendiente">
                    {format_money(saldo)}
                </span>
            </Flex>

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Input
                    value=monto_input
                    placeholder="Monto"
                    input_type=InputType::Number
                    attr:style="width: 110px;"
                />
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Primary
                    disabled=abonar_disabled
                    on_click=on_abonar
                >
                    "Abonar"
                </Button>
            </Flex>

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Select value=manual_select size=SelectSize::Small>
                    {EstadoPago::ALL
                        .into_iter()
                        .map(|e| view! { <option value=e.as_str()>{e.label()}</option> })
                        .collect_view()}
                </Select>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| confirm_open.set(true)
                >
                    {MANUAL_OVERRIDE_LABEL}
                </Button>
            </Flex>

            {move || validation_hint().map(|hint| view! {
                <div class="pago-manager__hint">{hint}</div>
            })}
            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <ConfirmDialog
                open=confirm_open
                title=MANUAL_OVERRIDE_LABEL.to_string()
                message=Signal::derive(move || {
                    let destino = manual_select
                        .get()
                        .parse::<EstadoPago>()
                        .map(|e| e.label())
                        .unwrap_or("?");
                    format!(
                        "El estado del pedido se cambiará a \"{}\" sin registrar ningún abono. ¿Continuar?",
                        destino
                    )
                })
                on_confirm=on_confirm_manual
            />
        </div>
    }
}
