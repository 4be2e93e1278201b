mod state;

use contracts::domain::a001_pedido::company::CompanyDetails;
use contracts::domain::a001_pedido::filter::FiltroEstadoPago;
use contracts::domain::a001_pedido::payment::is_consistent;
use contracts::domain::a001_pedido::Pedido;
use contracts::shared::format::{format_date, format_money};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use super::invoice::InvoiceButton;
use super::pago_manager::PagoManager;
use crate::domain::a001_pedido::api;
use crate::shared::api_utils::{use_api, AbortOnCleanup};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{Badge, DateRangePicker};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const NOTICE_MS: u32 = 4000;

fn row_key(pedido: &Pedido) -> String {
    format!(
        "{}:{}:{}",
        pedido.id,
        pedido.pago.as_deref().unwrap_or(""),
        pedido.historial_pagos.len()
    )
}

/// In-process orders with their payment controls.
#[component]
pub fn PedidoList() -> impl IntoView {
    let api = use_api();
    let abort = AbortOnCleanup::new();
    let state = create_state();

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let company = RwSignal::new(None::<CompanyDetails>);

    let cliente_input = RwSignal::new(String::new());
    let estado_select = RwSignal::new(FiltroEstadoPago::Todos.as_value().to_string());

    // Filters are client-side only.
    Effect::new(move |_| {
        let cliente = cliente_input.get();
        let estado = FiltroEstadoPago::from_value(&estado_select.get());
        state.update(|s| {
            s.cliente = cliente;
            s.estado_pago = estado;
        });
    });

    let load_pedidos = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let query = state.with_untracked(|s| s.query());
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let signal = abort.signal();
                match api::fetch_pedidos(&api, &query, signal.as_ref()).await {
                    Ok(pedidos) => {
                        log::debug!("Loaded {} pedidos", pedidos.len());
                        state.update(|s| {
                            s.pedidos = pedidos;
                            s.is_loaded = true;
                        });
                    }
                    Err(e) if e.is_aborted() => return,
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_loading.set(false);
            });
        }
    };
    let load_pedidos = StoredValue::new(load_pedidos);

    // Company details are needed only for invoices; a failure is not fatal.
    {
        let api = api.clone();
        spawn_local(async move {
            let signal = abort.signal();
            match api::fetch_company_details(&api, signal.as_ref()).await {
                Ok(details) => company.set(Some(details)),
                Err(e) if e.is_aborted() => {}
                Err(e) => log::error!("Company details unavailable: {}", e),
            }
        });
    }

    load_pedidos.with_value(|load| load());

    let show_notice = move |message: String| {
        set_notice.set(Some(message.clone()));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // A newer notice may have replaced this one.
            if notice.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                set_notice.set(None);
            }
        });
    };

    let on_pago_success = Callback::new(move |message: String| {
        show_notice(message);
        load_pedidos.with_value(|load| load());
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let total_pagos = Signal::derive(move || state.with(|s| s.total_pagos()));

    view! {
        <PageFrame page_id="a001_pedido--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Pedidos en proceso"</h1>
                    <Badge variant="primary".to_string()>
                        {move || visible.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <div class="page__summary">
                        <span class="page__summary-label">"Total abonado:"</span>
                        <span class="page__summary-value">
                            {move || format_money(total_pagos.get())}
                        </span>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_pedidos.with_value(|load| load())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="min-width: 460px;">
                            <DateRangePicker
                                date_from=Signal::derive(move || state.with(|s| s.fecha_inicio.clone()))
                                date_to=Signal::derive(move || state.with(|s| s.fecha_fin.clone()))
                                on_change=Callback::new(move |(from, to)| {
                                    state.update(|s| {
                                        s.fecha_inicio = from;
                                        s.fecha_fin = to;
                                    });
                                })
                                label="Fecha de creación:".to_string()
                            />
                        </div>

                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| load_pedidos.with_value(|load| load())
                            disabled=Signal::derive(move || loading.get())
                        >
                            "Buscar"
                        </Button>

                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                state.update(|s| {
                                    s.fecha_inicio.clear();
                                    s.fecha_fin.clear();
                                });
                                load_pedidos.with_value(|load| load());
                            }
                        >
                            "Sin fechas"
                        </Button>

                        <div style="flex: 1; max-width: 280px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Cliente:"</Label>
                                <Input value=cliente_input placeholder="Buscar por nombre..." />
                            </Flex>
                        </div>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Estado de pago:"</Label>
                            <Select value=estado_select>
                                {FiltroEstadoPago::options()
                                    .into_iter()
                                    .map(|f| view! { <option value=f.as_value()>{f.label()}</option> })
                                    .collect_view()}
                            </Select>
                        </Flex>
                    </Flex>
                </div>

                {move || notice.get().map(|msg| view! {
                    <div class="alert alert--success">{msg}</div>
                })}

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Table attr:style="width: 100%; min-width: 1100px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=70.0>"ID"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Cliente"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Etapa"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Fecha"</TableHeaderCell>
                            <TableHeaderCell min_width=320.0>"Pago"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"Abonado"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Factura"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=row_key
                            children=move |pedido: Pedido| {
                                let total = pedido.total();
                                let pagado = pedido.total_pagado();
                                let consistent = is_consistent(&pedido);
                                let fecha = pedido
                                    .fecha_creacion
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_default();
                                let etapa = pedido.estado_general.clone().unwrap_or_default();
                                let pedido_for_invoice = pedido.clone();
                                let pedido_id = pedido.id.clone();
                                let short_id = pedido.short_id(4);
                                let cliente = pedido.cliente().to_string();

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="pedido__id" title=pedido_id>
                                                    {short_id}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {cliente}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{etapa}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{fecha}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="pedido__pago">
                                                {(!consistent).then(|| view! {
                                                    <span
                                                        class="pedido__warning"
                                                        title="El estado guardado no coincide con los abonos registrados"
                                                    >
                                                        {icon("alert")}
                                                    </span>
                                                })}
                                                <PagoManager pedido=pedido on_success=on_pago_success />
                                            </div>
                                        </TableCell>
                                        <TableCellMoney value=Signal::derive(move || Some(total)) />
                                        <TableCellMoney value=Signal::derive(move || Some(pagado)) />
                                        <TableCell>
                                            <InvoiceButton
                                                pedido=pedido_for_invoice
                                                company=company.read_only()
                                            />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || state.with(|s| s.is_loaded) && visible.with(|v| v.is_empty())>
                    <div class="table__empty">"No hay pedidos que coincidan con los filtros."</div>
                </Show>
            </div>
        </PageFrame>
    }
}
