use crate::shared::serde_ext::null_to_default;
use serde::{Deserialize, Serialize};

// ============================================================================
// Wire formats
// ============================================================================

/// Response of `/pedidos/resumen-diario?date=YYYY-MM-DD`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenDiarioResponse {
    #[serde(default, deserialize_with = "null_to_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_abonos: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_ventas_firmes: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub details: Vec<ResumenDiarioDetalle>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoDetalle {
    #[serde(rename = "abono")]
    Abono,
    #[serde(rename = "ventaFirme")]
    VentaFirme,
    /// Missing or unrecognized `type`; shown as a plain abono
    #[default]
    #[serde(other)]
    Otro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenDiarioDetalle {
    #[serde(rename = "type", default, deserialize_with = "null_to_default")]
    pub tipo: TipoDetalle,
    #[serde(default, deserialize_with = "null_to_default")]
    pub pedido_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub timestamp: String,
}

/// Response of `/pedidos/resumen-venta-diaria?fecha_inicio&fecha_fin`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumenVentaDiariaResponse {
    #[serde(default, deserialize_with = "null_to_default")]
    pub ventas_firmes: Vec<VentaFirme>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub abonos: Vec<AbonoResumen>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_ventas_firmes: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_abonos: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub total_general: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VentaFirme {
    #[serde(rename = "_id", default, deserialize_with = "null_to_default")]
    pub id: String,
    #[serde(default)]
    pub cliente_id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub cliente_nombre: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fecha: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub monto: f64,
    #[serde(default)]
    pub metodo_pago: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoAbono {
    Inicial,
    Proceso,
    #[default]
    #[serde(other)]
    Otro,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbonoResumen {
    #[serde(rename = "_id", default, deserialize_with = "null_to_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub pedido_id: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub cliente_nombre: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fecha: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub monto: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tipo: TipoAbono,
    #[serde(default)]
    pub metodo_pago: Option<String>,
}

// ============================================================================
// View model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoMovimiento {
    VentaFirme,
    /// Daily summary does not tell the installment kind
    Abono,
    AbonoInicial,
    AbonoProceso,
}

impl TipoMovimiento {
    pub fn label(&self) -> &'static str {
        match self {
            TipoMovimiento::VentaFirme => "Venta firme",
            TipoMovimiento::Abono => "Abono",
            TipoMovimiento::AbonoInicial => "Inicial",
            TipoMovimiento::AbonoProceso => "En proceso",
        }
    }

    pub fn is_abono(&self) -> bool {
        !matches!(self, TipoMovimiento::VentaFirme)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movimiento {
    pub tipo: TipoMovimiento,
    pub pedido_id: String,
    pub cliente: String,
    pub fecha: String,
    pub monto: f64,
    pub metodo_pago: Option<String>,
}

impl Movimiento {
    /// Last six characters of the order id.
    pub fn pedido_corto(&self) -> String {
        let chars: Vec<char> = self.pedido_id.chars().collect();
        chars[chars.len().saturating_sub(6)..].iter().collect()
    }

    pub fn metodo_label(&self) -> &str {
        self.metodo_pago
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("N/A")
    }
}

/// Normalized summary shared by the daily and the ranged view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumenVenta {
    pub periodo: String,
    pub total_abonos: f64,
    pub total_ventas_firmes: f64,
    pub total_general: f64,
    pub ventas_firmes: Vec<Movimiento>,
    pub abonos: Vec<Movimiento>,
}

impl From<ResumenDiarioResponse> for ResumenVenta {
    fn from(r: ResumenDiarioResponse) -> Self {
        let (abonos, ventas_firmes): (Vec<_>, Vec<_>) = r
            .details
            .into_iter()
            .map(|d| Movimiento {
                tipo: match d.tipo {
                    TipoDetalle::Abono | TipoDetalle::Otro => TipoMovimiento::Abono,
                    TipoDetalle::VentaFirme => TipoMovimiento::VentaFirme,
                },
                pedido_id: d.pedido_id,
                cliente: String::new(),
                fecha: d.timestamp,
                monto: d.amount,
                metodo_pago: None,
            })
            .partition(|m| m.tipo.is_abono());

        Self {
            periodo: r.date,
            total_abonos: r.total_abonos,
            total_ventas_firmes: r.total_ventas_firmes,
            total_general: r.total_abonos + r.total_ventas_firmes,
            ventas_firmes,
            abonos,
        }
    }
}

impl ResumenVenta {
    pub fn from_rango(r: ResumenVentaDiariaResponse, query: &ResumenQuery) -> Self {
        let ventas_firmes = r
            .ventas_firmes
            .into_iter()
            .map(|v| Movimiento {
                tipo: TipoMovimiento::VentaFirme,
                pedido_id: v.id,
                cliente: v.cliente_nombre,
                fecha: v.fecha,
                monto: v.monto,
                metodo_pago: v.metodo_pago,
            })
            .collect();

        let abonos = r
            .abonos
            .into_iter()
            .map(|a| Movimiento {
                tipo: match a.tipo {
                    TipoAbono::Inicial => TipoMovimiento::AbonoInicial,
                    TipoAbono::Proceso => TipoMovimiento::AbonoProceso,
                    TipoAbono::Otro => TipoMovimiento::Abono,
                },
                pedido_id: a.pedido_id,
                cliente: a.cliente_nombre,
                fecha: a.fecha,
                monto: a.monto,
                metodo_pago: a.metodo_pago,
            })
            .collect();

        Self {
            periodo: query.periodo(),
            total_abonos: r.total_abonos,
            total_ventas_firmes: r.total_ventas_firmes,
            total_general: r.total_general,
            ventas_firmes,
            abonos,
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// Which summary a dashboard instance shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumenModo {
    Dia,
    Rango,
}

impl ResumenModo {
    pub fn title(&self) -> &'static str {
        match self {
            ResumenModo::Dia => "Resumen de Venta Diaria",
            ResumenModo::Rango => "Resumen de Ventas por Período",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumenQuery {
    Dia { date: String },
    Rango { fecha_inicio: String, fecha_fin: String },
}

impl ResumenQuery {
    pub fn path(&self) -> String {
        match self {
            ResumenQuery::Dia { date } => {
                format!("/pedidos/resumen-diario?date={}", urlencoding::encode(date))
            }
            ResumenQuery::Rango {
                fecha_inicio,
                fecha_fin,
            } => format!(
                "/pedidos/resumen-venta-diaria?fecha_inicio={}&fecha_fin={}",
                urlencoding::encode(fecha_inicio),
                urlencoding::encode(fecha_fin)
            ),
        }
    }

    pub fn periodo(&self) -> String {
        match self {
            ResumenQuery::Dia { date } => date.clone(),
            ResumenQuery::Rango {
                fecha_inicio,
                fecha_fin,
            } if fecha_inicio == fecha_fin => fecha_inicio.clone(),
            ResumenQuery::Rango {
                fecha_inicio,
                fecha_fin,
            } => format!("{} al {}", fecha_inicio, fecha_fin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_response_normalizes() {
        let json = r#"{
            "date": "2024-05-01",
            "totalAbonos": 150.5,
            "totalVentasFirmes": 300,
            "details": [
                {"type": "abono", "pedidoId": "66a1b2c3d4e5", "amount": 150.5, "timestamp": "2024-05-01T10:00:00Z"},
                {"type": "ventaFirme", "pedidoId": "77b2", "amount": 300, "timestamp": "2024-05-01T12:00:00Z"}
            ]
        }"#;
        let resp: ResumenDiarioResponse = serde_json::from_str(json).unwrap();
        let resumen = ResumenVenta::from(resp);
        assert_eq!(resumen.periodo, "2024-05-01");
        assert_eq!(resumen.total_general, 450.5);
        assert_eq!(resumen.abonos.len(), 1);
        assert_eq!(resumen.abonos[0].tipo, TipoMovimiento::Abono);
        assert_eq!(resumen.ventas_firmes[0].monto, 300.0);
    }

    #[test]
    fn test_range_response_normalizes() {
        let json = r#"{
            "ventas_firmes": [{"_id": "v1", "cliente_id": "c1", "cliente_nombre": "Ana", "fecha": "2024-05-01", "monto": 500}],
            "abonos": [
                {"_id": "a1", "pedido_id": "66a1b2c3d4e5f6", "cliente_nombre": "Luis", "fecha": "2024-05-02", "monto": 80, "tipo": "inicial", "metodo_pago": "efectivo"},
                {"_id": "a2", "pedido_id": "p2", "cliente_nombre": "Eva", "fecha": "2024-05-03", "monto": 20, "tipo": "proceso"}
            ],
            "total_ventas_firmes": 500,
            "total_abonos": 100,
            "total_general": 600
        }"#;
        let resp: ResumenVentaDiariaResponse = serde_json::from_str(json).unwrap();
        let query = ResumenQuery::Rango {
            fecha_inicio: "2024-05-01".into(),
            fecha_fin: "2024-05-31".into(),
        };
        let resumen = ResumenVenta::from_rango(resp, &query);
        assert_eq!(resumen.periodo, "2024-05-01 al 2024-05-31");
        assert_eq!(resumen.total_general, 600.0);
        assert_eq!(resumen.abonos[0].tipo, TipoMovimiento::AbonoInicial);
        assert_eq!(resumen.abonos[0].pedido_corto(), "d4e5f6");
        assert_eq!(resumen.abonos[0].metodo_label(), "efectivo");
        assert_eq!(resumen.abonos[1].tipo, TipoMovimiento::AbonoProceso);
        assert_eq!(resumen.abonos[1].metodo_label(), "N/A");
        assert_eq!(resumen.ventas_firmes[0].cliente, "Ana");
    }

    #[test]
    fn test_query_paths() {
        let dia = ResumenQuery::Dia {
            date: "2024-05-01".into(),
        };
        assert_eq!(dia.path(), "/pedidos/resumen-diario?date=2024-05-01");
        let rango = ResumenQuery::Rango {
            fecha_inicio: "2024-05-01".into(),
            fecha_fin: "2024-05-01".into(),
        };
        assert_eq!(
            rango.path(),
            "/pedidos/resumen-venta-diaria?fecha_inicio=2024-05-01&fecha_fin=2024-05-01"
        );
        assert_eq!(rango.periodo(), "2024-05-01");
    }

    #[test]
    fn test_unknown_or_missing_tipo_still_decodes() {
        let rango: ResumenVentaDiariaResponse = serde_json::from_str(
            r#"{
                "abonos": [
                    {"_id": "a1", "pedido_id": "p1", "monto": 80},
                    {"_id": "a2", "pedido_id": "p2", "monto": 20, "tipo": "reembolso"},
                    {"_id": "a3", "pedido_id": "p3", "monto": 5, "tipo": null}
                ],
                "total_abonos": 105,
                "total_general": 105
            }"#,
        )
        .unwrap();
        let query = ResumenQuery::Dia {
            date: "2024-05-01".into(),
        };
        let resumen = ResumenVenta::from_rango(rango, &query);
        assert_eq!(resumen.abonos.len(), 3);
        assert!(resumen
            .abonos
            .iter()
            .all(|m| m.tipo == TipoMovimiento::Abono));
        assert_eq!(resumen.total_general, 105.0);

        let diario: ResumenDiarioResponse = serde_json::from_str(
            r#"{
                "date": "2024-05-01",
                "totalAbonos": 30,
                "details": [
                    {"type": "devolucion", "pedidoId": "p1", "amount": 10},
                    {"pedidoId": "p2", "amount": 20}
                ]
            }"#,
        )
        .unwrap();
        let resumen = ResumenVenta::from(diario);
        assert_eq!(resumen.abonos.len(), 2);
        assert!(resumen.ventas_firmes.is_empty());
        assert_eq!(resumen.total_abonos, 30.0);
    }

    #[test]
    fn test_null_totals() {
        let resp: ResumenVentaDiariaResponse =
            serde_json::from_str(r#"{"ventas_firmes": null, "total_general": null}"#).unwrap();
        assert!(resp.ventas_firmes.is_empty());
        assert_eq!(resp.total_general, 0.0);
    }
}
