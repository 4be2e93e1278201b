use contracts::domain::a001_pedido::filter::{
    sum_pagos, FiltroEstadoPago, PedidoFilter, PedidosQuery,
};
use contracts::domain::a001_pedido::Pedido;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PedidoListState {
    /// Everything the last fetch returned, unfiltered
    pub pedidos: Vec<Pedido>,
    /// `YYYY-MM-DD`; blank means no bound
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub cliente: String,
    pub estado_pago: FiltroEstadoPago,
    pub is_loaded: bool,
}

impl PedidoListState {
    pub fn query(&self) -> PedidosQuery {
        PedidosQuery {
            fecha_inicio: self.fecha_inicio.clone(),
            fecha_fin: self.fecha_fin.clone(),
        }
    }

    pub fn filter(&self) -> PedidoFilter {
        PedidoFilter {
            cliente: self.cliente.clone(),
            estado_pago: self.estado_pago,
        }
    }

    pub fn visible(&self) -> Vec<Pedido> {
        self.filter().apply(&self.pedidos)
    }

    /// Payments across every fetched order, ignoring the client-side filters.
    pub fn total_pagos(&self) -> f64 {
        sum_pagos(&self.pedidos)
    }
}

pub fn create_state() -> RwSignal<PedidoListState> {
    RwSignal::new(PedidoListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pedido::{EstadoPago, PedidoItem, RegistroPago};

    fn pedido(id: &str, cliente: &str, pago: Option<&str>, pagos: &[f64]) -> Pedido {
        Pedido {
            id: id.to_string(),
            cliente_nombre: Some(cliente.to_string()),
            pago: pago.map(str::to_string),
            items: vec![PedidoItem {
                precio: 100.0,
                cantidad: 2.0,
                ..Default::default()
            }],
            historial_pagos: pagos
                .iter()
                .map(|m| RegistroPago {
                    monto: *m,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn sample_state() -> PedidoListState {
        PedidoListState {
            pedidos: vec![
                pedido("a1", "María Pérez", Some("abonado"), &[50.0]),
                pedido("a2", "Carlos Ruiz", None, &[]),
                pedido("a3", "Mariana López", Some("pagado"), &[150.0, 50.0]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_visible_applies_both_filters() {
        let mut state = sample_state();
        state.cliente = "  MARI ".to_string();
        assert_eq!(state.visible().len(), 2);

        state.estado_pago = FiltroEstadoPago::Solo(EstadoPago::Pagado);
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a3");
    }

    #[test]
    fn test_missing_pago_is_sin_pago() {
        let mut state = sample_state();
        state.estado_pago = FiltroEstadoPago::Solo(EstadoPago::SinPago);
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a2");
    }

    #[test]
    fn test_total_pagos_ignores_filters() {
        let mut state = sample_state();
        state.cliente = "carlos".to_string();
        assert_eq!(state.total_pagos(), 250.0);
    }

    #[test]
    fn test_query_passes_dates() {
        let state = PedidoListState {
            fecha_inicio: "2024-05-01".to_string(),
            fecha_fin: "2024-05-31".to_string(),
            ..Default::default()
        };
        let path = state.query().path();
        assert!(path.ends_with("&fecha_inicio=2024-05-01&fecha_fin=2024-05-31"));
    }
}
