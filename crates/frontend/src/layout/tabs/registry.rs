//! Tab key to view. Every key the sidebar can open is matched here.

use crate::dashboards::d400_resumen_venta::ui::ResumenDashboard;
use crate::domain::a001_pedido::ui::list::PedidoList;
use crate::domain::a002_inventario::ui::carga::CargaInventario;
use crate::domain::a002_inventario::ui::preview::InventarioPreview;
use contracts::dashboards::d400_resumen_venta::ResumenModo;
use leptos::prelude::*;

pub const TAB_RESUMEN_DIARIO: &str = "d400_resumen_diario";
pub const TAB_RESUMEN_RANGO: &str = "d400_resumen_rango";
pub const TAB_PEDIDOS: &str = "a001_pedido";
pub const TAB_INVENTARIO_CARGA: &str = "a002_inventario_carga";
pub const TAB_INVENTARIO_PREVIEW: &str = "a002_inventario_preview";

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards (d4xx)
        TAB_RESUMEN_DIARIO => view! { <ResumenDashboard modo=ResumenModo::Dia /> }.into_any(),
        TAB_RESUMEN_RANGO => view! { <ResumenDashboard modo=ResumenModo::Rango /> }.into_any(),

        // Aggregates (aXXX)
        TAB_PEDIDOS => view! { <PedidoList /> }.into_any(),
        TAB_INVENTARIO_CARGA => view! { <CargaInventario /> }.into_any(),
        TAB_INVENTARIO_PREVIEW => view! { <InventarioPreview /> }.into_any(),

        _ => {
            log::warn!("no view registered for tab key: {}", key);
            view! { <div class="placeholder">"Vista no disponible"</div> }.into_any()
        }
    }
}
