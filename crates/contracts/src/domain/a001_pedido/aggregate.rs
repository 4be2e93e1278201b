use crate::shared::serde_ext::null_to_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::payment;

// ============================================================================
// Payment status
// ============================================================================

/// Payment status of an order as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstadoPago {
    #[serde(rename = "sin pago")]
    SinPago,
    #[serde(rename = "abonado")]
    Abonado,
    #[serde(rename = "pagado")]
    Pagado,
}

impl EstadoPago {
    pub const ALL: [EstadoPago; 3] = [EstadoPago::SinPago, EstadoPago::Abonado, EstadoPago::Pagado];

    /// Wire value (`"sin pago"`, `"abonado"`, `"pagado"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPago::SinPago => "sin pago",
            EstadoPago::Abonado => "abonado",
            EstadoPago::Pagado => "pagado",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EstadoPago::SinPago => "Sin pago",
            EstadoPago::Abonado => "Abonado",
            EstadoPago::Pagado => "Pagado",
        }
    }
}

impl fmt::Display for EstadoPago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstadoPago {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sin pago" => Ok(EstadoPago::SinPago),
            "abonado" => Ok(EstadoPago::Abonado),
            "pagado" => Ok(EstadoPago::Pagado),
            other => Err(format!("Estado de pago desconocido: {}", other)),
        }
    }
}

// ============================================================================
// Workflow stage
// ============================================================================

/// Production stage of an order. `Pendiente` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoGeneral {
    Orden1,
    Orden2,
    Orden3,
    Orden4,
    Orden5,
    Orden6,
    Pendiente,
}

impl EstadoGeneral {
    /// Stages listed by the "in process" view, in query order.
    pub const EN_PROCESO: [EstadoGeneral; 7] = [
        EstadoGeneral::Orden1,
        EstadoGeneral::Orden2,
        EstadoGeneral::Orden3,
        EstadoGeneral::Orden4,
        EstadoGeneral::Orden5,
        EstadoGeneral::Orden6,
        EstadoGeneral::Pendiente,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoGeneral::Orden1 => "orden1",
            EstadoGeneral::Orden2 => "orden2",
            EstadoGeneral::Orden3 => "orden3",
            EstadoGeneral::Orden4 => "orden4",
            EstadoGeneral::Orden5 => "orden5",
            EstadoGeneral::Orden6 => "orden6",
            EstadoGeneral::Pendiente => "pendiente",
        }
    }
}

impl FromStr for EstadoGeneral {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Self::EN_PROCESO
            .iter()
            .copied()
            .find(|e| e.as_str() == value)
            .ok_or_else(|| format!("Etapa desconocida: {}", s))
    }
}

// ============================================================================
// Order
// ============================================================================

/// Line item of an order. Missing numbers count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PedidoItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub codigo: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub precio: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub cantidad: f64,
}

impl PedidoItem {
    pub fn subtotal(&self) -> f64 {
        self.precio * self.cantidad
    }

    /// `"nombre - descripcion"`, skipping whichever part is blank.
    pub fn display_name(&self) -> String {
        [self.nombre.as_deref(), self.descripcion.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

/// Installment entry. Append-only on the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistroPago {
    #[serde(default, deserialize_with = "null_to_default")]
    pub monto: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fecha: String,
    #[serde(default)]
    pub metodo: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}

/// Order (`pedido`) as returned by `/pedidos/estado/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub cliente_id: Option<String>,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    #[serde(default)]
    pub estado_general: Option<String>,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    /// Raw status; see [`Pedido::estado_pago`]
    #[serde(default)]
    pub pago: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<PedidoItem>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub historial_pagos: Vec<RegistroPago>,
    /// Server-side running total. Informational only; totals are always
    /// recomputed from `historial_pagos`.
    #[serde(default)]
    pub total_abonado: Option<f64>,
}

impl Pedido {
    /// Stored status; missing or unknown values read as `SinPago`.
    pub fn estado_pago(&self) -> EstadoPago {
        self.pago
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(EstadoPago::SinPago)
    }

    pub fn total(&self) -> f64 {
        payment::order_total(&self.items)
    }

    pub fn total_pagado(&self) -> f64 {
        payment::total_paid(&self.historial_pagos)
    }

    pub fn saldo(&self) -> f64 {
        payment::balance_due(self.total(), self.total_pagado())
    }

    pub fn cliente(&self) -> &str {
        self.cliente_nombre.as_deref().unwrap_or_default()
    }

    /// Last `n` characters of the id, as shown in tables.
    pub fn short_id(&self, n: usize) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        let start = chars.len().saturating_sub(n);
        chars[start..].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pedido_from_backend_json() {
        let json = r#"{
            "_id": "66a1b2c3d4e5f6a7b8c9d0e1",
            "cliente_nombre": "Ana Pérez",
            "estado_general": "orden3",
            "pago": "abonado",
            "items": [{"id": "i1", "precio": 100, "cantidad": 2, "nombre": "Puerta"}],
            "historial_pagos": [{"monto": 50, "fecha": "2024-05-01T10:00:00Z"}],
            "total_abonado": null
        }"#;
        let pedido: Pedido = serde_json::from_str(json).unwrap();
        assert_eq!(pedido.estado_pago(), EstadoPago::Abonado);
        assert_eq!(pedido.total(), 200.0);
        assert_eq!(pedido.total_pagado(), 50.0);
        assert_eq!(pedido.saldo(), 150.0);
        assert_eq!(pedido.short_id(4), "d0e1");
        assert_eq!(pedido.total_abonado, None);
    }

    #[test]
    fn test_missing_collections_and_numbers() {
        let pedido: Pedido =
            serde_json::from_str(r#"{"_id": "x", "items": [{"precio": null}], "historial_pagos": null}"#)
                .unwrap();
        assert_eq!(pedido.items[0].subtotal(), 0.0);
        assert!(pedido.historial_pagos.is_empty());
        assert_eq!(pedido.estado_pago(), EstadoPago::SinPago);
        assert_eq!(pedido.cliente(), "");
    }

    #[test]
    fn test_estado_pago_wire_format() {
        assert_eq!(serde_json::to_string(&EstadoPago::SinPago).unwrap(), "\"sin pago\"");
        assert_eq!("Pagado".parse::<EstadoPago>(), Ok(EstadoPago::Pagado));
        assert!("otro".parse::<EstadoPago>().is_err());
    }

    #[test]
    fn test_estado_general_order() {
        let values: Vec<&str> = EstadoGeneral::EN_PROCESO.iter().map(|e| e.as_str()).collect();
        assert_eq!(
            values,
            vec!["orden1", "orden2", "orden3", "orden4", "orden5", "orden6", "pendiente"]
        );
        assert_eq!("ORDEN2".parse::<EstadoGeneral>(), Ok(EstadoGeneral::Orden2));
    }

    #[test]
    fn test_item_display_name() {
        let item = PedidoItem {
            nombre: Some("Puerta".into()),
            descripcion: Some("Cedro 80cm".into()),
            ..Default::default()
        };
        assert_eq!(item.display_name(), "Puerta - Cedro 80cm");
        let item = PedidoItem {
            descripcion: Some("Marco".into()),
            ..Default::default()
        };
        assert_eq!(item.display_name(), "Marco");
    }

    #[test]
    fn test_short_id_shorter_than_n() {
        let pedido = Pedido {
            id: "ab".into(),
            ..Default::default()
        };
        assert_eq!(pedido.short_id(6), "ab");
    }
}
