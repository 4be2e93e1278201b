use contracts::dashboards::d400_resumen_venta::{Movimiento, ResumenModo, ResumenQuery, ResumenVenta};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_resumen_venta::api;
use crate::shared::api_utils::{use_api, AbortOnCleanup};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{Badge, DateInput, DateRangePicker, StatCard, StatTone};
use crate::shared::date_utils::{format_datetime, today_iso};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Sales summary for one day (`Dia`) or a date range (`Rango`).
#[component]
pub fn ResumenDashboard(modo: ResumenModo) -> impl IntoView {
    let api = use_api();
    let abort = AbortOnCleanup::new();

    let today = today_iso();
    let (fecha_inicio, set_fecha_inicio) = signal(today.clone());
    let (fecha_fin, set_fecha_fin) = signal(today);
    // Bumped by the refresh button to re-run the same query.
    let reload = RwSignal::new(0u32);

    let (data, set_data) = signal(None::<ResumenVenta>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let query = Memo::new(move |_| match modo {
        ResumenModo::Dia => ResumenQuery::Dia {
            date: fecha_inicio.get(),
        },
        ResumenModo::Rango => ResumenQuery::Rango {
            fecha_inicio: fecha_inicio.get(),
            fecha_fin: fecha_fin.get(),
        },
    });

    Effect::new(move |_| {
        reload.track();
        let query = query.get();
        let api = api.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let signal = abort.signal();
            match api::fetch_resumen(&api, &query, signal.as_ref()).await {
                Ok(resumen) => set_data.set(Some(resumen)),
                Err(e) if e.is_aborted() => return,
                Err(e) => {
                    log::error!("Resumen {} failed: {}", query.path(), e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let total = move |f: fn(&ResumenVenta) -> f64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };
    let conteo = move |f: fn(&ResumenVenta) -> usize| {
        Signal::derive(move || data.with(|d| d.as_ref().map(|r| movimientos_label(f(r)))))
    };
    let periodo = move || {
        data.with(|d| d.as_ref().map(|r| r.periodo.clone()))
            .unwrap_or_else(|| query.with(|q| q.periodo()))
    };

    let page_id = match modo {
        ResumenModo::Dia => "d400_resumen_diario--dashboard",
        ResumenModo::Rango => "d400_resumen_rango--dashboard",
    };

    let filters = match modo {
        ResumenModo::Dia => view! {
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Fecha:"</Label>
                <DateInput
                    value=fecha_inicio
                    on_change=move |date: String| set_fecha_inicio.set(date)
                />
            </Flex>
        }
        .into_any(),
        ResumenModo::Rango => view! {
            <div style="min-width: 460px;">
                <DateRangePicker
                    date_from=fecha_inicio
                    date_to=fecha_fin
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        set_fecha_inicio.set(from);
                        set_fecha_fin.set(to);
                    })
                    label="Período:".to_string()
                />
            </div>
        }
        .into_any(),
    };

    let refresh_label = match modo {
        ResumenModo::Dia => "Actualizar",
        ResumenModo::Rango => "Consultar",
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{modo.title()}</h1>
                    <Badge variant="neutral".to_string()>{periodo}</Badge>
                </div>
                <div class="page__header-right">
                    {filters}
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| reload.update(|n| *n += 1)
                    >
                        {icon("refresh")}
                        " "
                        {refresh_label}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="stat-cards">
                    <StatCard
                        label="Total abonos"
                        icon_name="payments"
                        value=total(|r| r.total_abonos)
                        subtitle=conteo(|r| r.abonos.len())
                    />
                    <StatCard
                        label="Ventas firmes"
                        icon_name="orders"
                        value=total(|r| r.total_ventas_firmes)
                        subtitle=conteo(|r| r.ventas_firmes.len())
                    />
                    <StatCard
                        label="Total general"
                        icon_name="bar-chart"
                        value=total(|r| r.total_general)
                        tone=StatTone::Success
                    />
                </div>

                <Show when=move || loading.get()>
                    <div class="table__loading">"Cargando resumen..."</div>
                </Show>

                <h2 class="dashboard__section">"Ventas firmes"</h2>
                <MovimientosTable
                    movimientos=Signal::derive(move || {
                        data.with(|d| d.as_ref().map(|r| r.ventas_firmes.clone()).unwrap_or_default())
                    })
                    show_tipo=false
                />

                <h2 class="dashboard__section">"Abonos"</h2>
                <MovimientosTable
                    movimientos=Signal::derive(move || {
                        data.with(|d| d.as_ref().map(|r| r.abonos.clone()).unwrap_or_default())
                    })
                    show_tipo=true
                />
            </div>
        </PageFrame>
    }
}

fn movimientos_label(n: usize) -> String {
    match n {
        1 => "1 movimiento".to_string(),
        n => format!("{} movimientos", n),
    }
}

#[component]
fn MovimientosTable(
    #[prop(into)] movimientos: Signal<Vec<Movimiento>>,
    show_tipo: bool,
) -> impl IntoView {
    view! {
        <Show
            when=move || movimientos.with(|m| !m.is_empty())
            fallback=|| view! { <div class="table__empty">"Sin movimientos en el período."</div> }
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Pedido"</TableHeaderCell>
                        <TableHeaderCell>"Cliente"</TableHeaderCell>
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        {show_tipo.then(|| view! { <TableHeaderCell>"Tipo"</TableHeaderCell> })}
                        <TableHeaderCell>"Método"</TableHeaderCell>
                        <TableHeaderCell>"Monto"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || movimientos.get().into_iter().map(|m| {
                        let monto = m.monto;
                        let pedido_corto = m.pedido_corto();
                        let tipo_label = m.tipo.label();
                        let pedido_id = m.pedido_id.clone();
                        let cliente = m.cliente.clone();
                        let fecha = format_datetime(&m.fecha);
                        let metodo = m.metodo_label().to_string();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <span title=pedido_id>{pedido_corto}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{cliente}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{fecha}</TableCellLayout>
                                </TableCell>
                                {show_tipo.then(|| view! {
                                    <TableCell>
                                        <TableCellLayout>{tipo_label}</TableCellLayout>
                                    </TableCell>
                                })}
                                <TableCell>
                                    <TableCellLayout>{metodo}</TableCellLayout>
                                </TableCell>
                                <TableCellMoney value=Signal::derive(move || Some(monto)) />
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movimientos_label() {
        assert_eq!(movimientos_label(0), "0 movimientos");
        assert_eq!(movimientos_label(1), "1 movimiento");
        assert_eq!(movimientos_label(12), "12 movimientos");
    }
}
