//! Invoice preview dialog and printing.

use contracts::domain::a001_pedido::company::CompanyDetails;
use contracts::domain::a001_pedido::invoice::{format_cantidad, InvoiceDocument};
use contracts::domain::a001_pedido::Pedido;
use contracts::shared::format::format_money;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::print::print_html;

/// "Ver preliminar" button plus the dialog it opens.
#[component]
pub fn InvoiceButton(
    pedido: Pedido,
    /// `None` until the company details have loaded
    #[prop(into)]
    company: Signal<Option<CompanyDetails>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let pedido = StoredValue::new(pedido);
    let (print_error, set_print_error) = signal::<Option<String>>(None);

    let document = Memo::new(move |_| {
        let company = company.get();
        pedido.with_value(|p| InvoiceDocument::build(p, company.as_ref()))
    });

    let on_print = move |_| {
        let html = document.with_untracked(InvoiceDocument::to_print_html);
        match print_html(&html) {
            Ok(()) => set_print_error.set(None),
            Err(e) => {
                log::error!("Print failed: {}", e);
                set_print_error.set(Some(e));
            }
        }
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            on_click=move |_| open.set(true)
        >
            {icon("eye")}
            " Ver preliminar"
        </Button>

        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || document.with(|d| d.titulo)}</DialogTitle>
                    <DialogContent>
                        {move || document.with(|d| view! { <InvoicePreview document=d.clone() /> })}
                        {move || print_error.get().map(|err| view! {
                            <div class="alert alert--error">{err}</div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=on_print>
                            {icon("printer")}
                            " Imprimir"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "Cerrar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
fn InvoicePreview(document: InvoiceDocument) -> impl IntoView {
    let empresa = document.empresa.clone().map(|e| {
        view! {
            <div class="invoice__empresa">
                <div class="invoice__empresa-nombre">{e.nombre}</div>
                <div>"RIF: " {e.rif}</div>
                <div>"Dirección: " {e.direccion}</div>
                <div>"Teléfono: " {e.telefono}</div>
                <div>"Email: " {e.email}</div>
            </div>
        }
    });

    view! {
        <div class="invoice">
            {empresa}
            <div class="invoice__cliente">"Cliente: " {document.cliente.clone()}</div>

            <h3 class="invoice__section">"Items del Pedido"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Código"</TableHeaderCell>
                        <TableHeaderCell>"Descripción"</TableHeaderCell>
                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                        <TableHeaderCell>"Precio Unitario"</TableHeaderCell>
                        <TableHeaderCell>"Total Item"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {document.lineas.clone().into_iter().map(|linea| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{linea.codigo.clone()}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{linea.descripcion.clone()}</TableCellLayout></TableCell>
                            <TableCell class="text-right">{format_cantidad(linea.cantidad)}</TableCell>
                            <TableCell class="text-right">{format_money(linea.precio_unitario)}</TableCell>
                            <TableCell class="text-right">{format_money(linea.total)}</TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>

            <h3 class="invoice__section">"Historial de Abonos"</h3>
            {if document.abonos.is_empty() {
                view! { <div class="table__empty">"Sin abonos registrados."</div> }.into_any()
            } else {
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Monto Abonado"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {document.abonos.clone().into_iter().map(|abono| view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{abono.fecha.clone()}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_money(abono.monto)}</TableCell>
                                    <TableCell><TableCellLayout>{abono.estado.clone()}</TableCellLayout></TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                }.into_any()
            }}

            <div class="invoice__totales">
                <div>"Total Pedido: " {format_money(document.total_pedido)}</div>
                <div>"Total Abonado: " {format_money(document.total_abonado)}</div>
                <div class="invoice__pendiente">
                    "Monto Pendiente: " {format_money(document.monto_pendiente)}
                </div>
            </div>
        </div>
    }
}
