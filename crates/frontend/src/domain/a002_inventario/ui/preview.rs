//! Current inventory table with PDF/Excel export.

use contracts::domain::a002_inventario::InventarioItem;
use contracts::shared::format::format_number_with_decimals;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::domain::a002_inventario::api;
use crate::shared::api_utils::{use_api, AbortOnCleanup};
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ConfirmDialog;
use crate::shared::export::{export_pdf, export_xlsx, ExcelExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const EXPORT_TITLE: &str = "Inventario Actual";
const EXPORT_SHEET: &str = "Inventario";

impl ExcelExportable for InventarioItem {
    fn headers() -> Vec<&'static str> {
        InventarioItem::EXPORT_HEADERS.to_vec()
    }

    fn to_row(&self) -> Vec<Value> {
        self.export_row()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormato {
    Pdf,
    Excel,
}

impl ExportFormato {
    fn label(self) -> &'static str {
        match self {
            ExportFormato::Pdf => "PDF",
            ExportFormato::Excel => "EXCEL",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            ExportFormato::Pdf => "inventario.pdf",
            ExportFormato::Excel => "inventario.xlsx",
        }
    }

    fn run(self, items: &[InventarioItem]) -> Result<(), String> {
        match self {
            ExportFormato::Pdf => export_pdf(items, EXPORT_TITLE, self.file_name()),
            ExportFormato::Excel => export_xlsx(items, EXPORT_SHEET, self.file_name()),
        }
    }
}

fn confirm_message(formato: ExportFormato) -> String {
    format!(
        "¿Estás seguro de que quieres exportar el inventario como {}?",
        formato.label()
    )
}

/// Fetches `/inventario/all` on mount and whenever `refresh` changes.
#[component]
pub fn InventarioPanel(#[prop(optional, into)] refresh: Signal<u32>) -> impl IntoView {
    let api = use_api();
    let abort = AbortOnCleanup::new();

    let items = RwSignal::new(Vec::<InventarioItem>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let pending_export = RwSignal::new(None::<ExportFormato>);
    let confirm_open = RwSignal::new(false);

    Effect::new(move |_| {
        let generation = refresh.get();
        let api = api.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let signal = abort.signal();
            match api::fetch_all(&api, signal.as_ref()).await {
                Ok(data) => {
                    log::debug!("Inventario #{}: {} items", generation, data.len());
                    items.set(data);
                }
                Err(e) if e.is_aborted() => return,
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let ask_export = move |formato: ExportFormato| {
        pending_export.set(Some(formato));
        confirm_open.set(true);
    };

    let on_confirm_export = Callback::new(move |_| {
        let Some(formato) = pending_export.get_untracked() else {
            return;
        };
        let result = items.with_untracked(|data| formato.run(data));
        if let Err(e) = result {
            log::error!("Export {} failed: {}", formato.label(), e);
            set_error.set(Some(e));
        }
        pending_export.set(None);
    });

    let export_disabled = Signal::derive(move || loading.get() || items.with(|i| i.is_empty()));

    view! {
        <div class="inventario-panel">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="inventario-panel__title">
                    "Inventario actual "
                    <span class="inventario-panel__count">
                        {move || format!("({})", items.with(|i| i.len()))}
                    </span>
                </h2>
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=export_disabled
                        on_click=move |_| ask_export(ExportFormato::Pdf)
                    >
                        {icon("download")}
                        " Exportar PDF"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=export_disabled
                        on_click=move |_| ask_export(ExportFormato::Excel)
                    >
                        {icon("download")}
                        " Exportar Excel"
                    </Button>
                </Flex>
            </Flex>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <Show when=move || loading.get()>
                <div class="table__loading">"Cargando inventario..."</div>
            </Show>

            <InventarioTable items=Signal::derive(move || items.get()) />

            <ConfirmDialog
                open=confirm_open
                title="Exportar inventario".to_string()
                message=Signal::derive(move || {
                    pending_export.get().map(confirm_message).unwrap_or_default()
                })
                confirm_label="Exportar"
                on_confirm=on_confirm_export
            />
        </div>
    }
}

/// Código, descripción, modelo, costo, existencia, precio.
#[component]
pub fn InventarioTable(#[prop(into)] items: Signal<Vec<InventarioItem>>) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    {InventarioItem::EXPORT_HEADERS
                        .into_iter()
                        .map(|h| view! { <TableHeaderCell>{h}</TableHeaderCell> })
                        .collect_view()}
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || items.get().into_iter().enumerate()
                    key=|(idx, item)| format!("{}:{}", idx, item.codigo)
                    children=move |(_, item)| {
                        let costo = item.costo;
                        let precio = item.precio;
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{item.codigo}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{item.descripcion}</TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{item.modelo}</TableCellLayout></TableCell>
                                <TableCellMoney value=Signal::derive(move || Some(costo)) />
                                <TableCell class="text-right">
                                    {format_number_with_decimals(item.cantidad, 0)}
                                </TableCell>
                                <TableCellMoney value=Signal::derive(move || Some(precio)) />
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}

/// Standalone tab around [`InventarioPanel`].
#[component]
pub fn InventarioPreview() -> impl IntoView {
    let refresh = RwSignal::new(0u32);

    view! {
        <PageFrame page_id="a002_inventario--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventario"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh.update(|n| *n += 1)
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                <InventarioPanel refresh=refresh />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_message() {
        assert_eq!(
            confirm_message(ExportFormato::Pdf),
            "¿Estás seguro de que quieres exportar el inventario como PDF?"
        );
        assert_eq!(
            confirm_message(ExportFormato::Excel),
            "¿Estás seguro de que quieres exportar el inventario como EXCEL?"
        );
    }

    #[test]
    fn test_export_files() {
        assert_eq!(ExportFormato::Pdf.file_name(), "inventario.pdf");
        assert_eq!(ExportFormato::Excel.file_name(), "inventario.xlsx");
        assert_eq!(InventarioItem::headers().len(), 6);
    }
}
