use super::aggregate::{EstadoGeneral, EstadoPago, Pedido};

/// Payment status filter of the order list (`"todos"` or one status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiltroEstadoPago {
    #[default]
    Todos,
    Solo(EstadoPago),
}

impl FiltroEstadoPago {
    /// Value used by the filter select.
    pub fn as_value(&self) -> &'static str {
        match self {
            FiltroEstadoPago::Todos => "todos",
            FiltroEstadoPago::Solo(estado) => estado.as_str(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        value
            .parse::<EstadoPago>()
            .map(FiltroEstadoPago::Solo)
            .unwrap_or(FiltroEstadoPago::Todos)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FiltroEstadoPago::Todos => "Todos",
            FiltroEstadoPago::Solo(estado) => estado.label(),
        }
    }

    pub fn options() -> Vec<FiltroEstadoPago> {
        std::iter::once(FiltroEstadoPago::Todos)
            .chain(EstadoPago::ALL.into_iter().map(FiltroEstadoPago::Solo))
            .collect()
    }
}

/// Client-side filter over already fetched orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PedidoFilter {
    /// Case-insensitive substring of the client name
    pub cliente: String,
    pub estado_pago: FiltroEstadoPago,
}

impl PedidoFilter {
    pub fn matches(&self, pedido: &Pedido) -> bool {
        let needle = self.cliente.trim().to_lowercase();
        let cliente_ok = needle.is_empty() || pedido.cliente().to_lowercase().contains(&needle);

        let estado_ok = match self.estado_pago {
            FiltroEstadoPago::Todos => true,
            FiltroEstadoPago::Solo(estado) => pedido.estado_pago() == estado,
        };

        cliente_ok && estado_ok
    }

    pub fn apply(&self, pedidos: &[Pedido]) -> Vec<Pedido> {
        pedidos.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Server-side query of the "in process" order list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PedidosQuery {
    /// `YYYY-MM-DD`, blank means open
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl PedidosQuery {
    /// `/pedidos/estado/?estado_general=orden1&...&estado_general=pendiente[&fecha_inicio=..][&fecha_fin=..]`
    pub fn path(&self) -> String {
        let mut params: Vec<String> = EstadoGeneral::EN_PROCESO
            .iter()
            .map(|e| format!("estado_general={}", urlencoding::encode(e.as_str())))
            .collect();

        let fecha_inicio = self.fecha_inicio.trim();
        if !fecha_inicio.is_empty() {
            params.push(format!("fecha_inicio={}", urlencoding::encode(fecha_inicio)));
        }
        let fecha_fin = self.fecha_fin.trim();
        if !fecha_fin.is_empty() {
            params.push(format!("fecha_fin={}", urlencoding::encode(fecha_fin)));
        }

        format!("/pedidos/estado/?{}", params.join("&"))
    }
}

/// Sum of every installment across the given orders.
pub fn sum_pagos(pedidos: &[Pedido]) -> f64 {
    pedidos.iter().map(Pedido::total_pagado).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pedido::RegistroPago;

    fn pedido(cliente: &str, pago: Option<&str>) -> Pedido {
        Pedido {
            id: cliente.to_string(),
            cliente_nombre: Some(cliente.to_string()),
            pago: pago.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_filter_is_case_insensitive_substring() {
        let filter = PedidoFilter {
            cliente: "  pÉrez ".to_string(),
            ..Default::default()
        };
        assert!(filter.matches(&pedido("Ana PÉREZ", None)));
        assert!(!filter.matches(&pedido("Luis Gómez", None)));
    }

    #[test]
    fn test_status_filter() {
        let pedidos = vec![
            pedido("a", Some("pagado")),
            pedido("b", Some("abonado")),
            pedido("c", None),
        ];
        let filter = PedidoFilter {
            estado_pago: FiltroEstadoPago::Solo(EstadoPago::SinPago),
            ..Default::default()
        };
        let ids: Vec<String> = filter.apply(&pedidos).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["c"]);
        assert_eq!(PedidoFilter::default().apply(&pedidos).len(), 3);
    }

    #[test]
    fn test_filter_values() {
        assert_eq!(FiltroEstadoPago::from_value("todos"), FiltroEstadoPago::Todos);
        assert_eq!(
            FiltroEstadoPago::from_value("abonado"),
            FiltroEstadoPago::Solo(EstadoPago::Abonado)
        );
        assert_eq!(FiltroEstadoPago::Solo(EstadoPago::SinPago).as_value(), "sin pago");
        assert_eq!(FiltroEstadoPago::options().len(), 4);
    }

    #[test]
    fn test_query_path_repeats_every_stage() {
        let query = PedidosQuery::default();
        assert_eq!(
            query.path(),
            "/pedidos/estado/?estado_general=orden1&estado_general=orden2&estado_general=orden3\
             &estado_general=orden4&estado_general=orden5&estado_general=orden6&estado_general=pendiente"
        );

        let query = PedidosQuery {
            fecha_inicio: "2024-05-01".into(),
            fecha_fin: "2024-05-31".into(),
        };
        assert!(query
            .path()
            .ends_with("estado_general=pendiente&fecha_inicio=2024-05-01&fecha_fin=2024-05-31"));
    }

    #[test]
    fn test_sum_pagos() {
        let mut a = pedido("a", None);
        a.historial_pagos = vec![
            RegistroPago { monto: 10.0, ..Default::default() },
            RegistroPago { monto: 5.5, ..Default::default() },
        ];
        let mut b = pedido("b", None);
        b.historial_pagos = vec![RegistroPago { monto: 4.5, ..Default::default() }];
        assert_eq!(sum_pagos(&[a, b]), 20.0);
    }
}
