//! Payment reconciliation: totals, derived status and installment planning.
//!
//! Status is always derived from the installment history and the items;
//! the server-side `total_abonado` is never consulted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{EstadoPago, Pedido, PedidoItem, RegistroPago};

/// Label of the explicit status override action.
pub const MANUAL_OVERRIDE_LABEL: &str = "Cambio manual de estado";

/// Amount in integer cents; used for every status comparison.
pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

pub fn order_total(items: &[PedidoItem]) -> f64 {
    items.iter().map(PedidoItem::subtotal).sum()
}

pub fn total_paid(history: &[RegistroPago]) -> f64 {
    history.iter().map(|p| p.monto).sum()
}

pub fn balance_due(total: f64, paid: f64) -> f64 {
    total - paid
}

/// `paid <= 0` → sin pago, `paid < total` → abonado, otherwise pagado.
pub fn derive_estado(paid: f64, total: f64) -> EstadoPago {
    let paid = to_cents(paid);
    if paid <= 0 {
        EstadoPago::SinPago
    } else if paid < to_cents(total) {
        EstadoPago::Abonado
    } else {
        EstadoPago::Pagado
    }
}

/// Whether the stored status matches the one derived from history and items.
pub fn is_consistent(pedido: &Pedido) -> bool {
    pedido.estado_pago() == derive_estado(pedido.total_pagado(), pedido.total())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PagoError {
    #[error("Ingrese el monto del abono")]
    Empty,
    #[error("El monto \"{0}\" no es un número válido")]
    NotANumber(String),
    #[error("El monto del abono debe ser mayor que cero")]
    NotPositive,
}

/// Validate the installment input before any request is made.
pub fn parse_abono(input: &str) -> Result<f64, PagoError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PagoError::Empty);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PagoError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(PagoError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(PagoError::NotPositive);
    }
    Ok(value)
}

/// Body of `PATCH /pedidos/{id}/pago`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagoUpdate {
    pub pago: EstadoPago,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monto: Option<f64>,
}

impl PagoUpdate {
    /// Status change without an amount.
    pub fn manual(estado: EstadoPago) -> Self {
        Self {
            pago: estado,
            monto: None,
        }
    }
}

/// Outcome of registering one installment against an order.
#[derive(Debug, Clone, PartialEq)]
pub struct AbonoPlan {
    pub monto: f64,
    pub total: f64,
    pub pagado_antes: f64,
    pub pagado_despues: f64,
    pub estado: EstadoPago,
}

impl AbonoPlan {
    pub fn saldo(&self) -> f64 {
        balance_due(self.total, self.pagado_despues)
    }

    pub fn update(&self) -> PagoUpdate {
        PagoUpdate {
            pago: self.estado,
            monto: Some(self.monto),
        }
    }
}

pub fn plan_abono(pedido: &Pedido, monto: f64) -> AbonoPlan {
    let total = pedido.total();
    let pagado_antes = pedido.total_pagado();
    let pagado_despues = pagado_antes + monto;
    AbonoPlan {
        monto,
        total,
        pagado_antes,
        pagado_despues,
        estado: derive_estado(pagado_despues, total),
    }
}

/// Path of the payment endpoint for one order.
pub fn pago_path(pedido_id: &str) -> String {
    format!("/pedidos/{}/pago", urlencoding::encode(pedido_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pedido(items: &[(f64, f64)], pagos: &[f64]) -> Pedido {
        Pedido {
            id: "p1".into(),
            items: items
                .iter()
                .map(|&(precio, cantidad)| PedidoItem {
                    precio,
                    cantidad,
                    ..Default::default()
                })
                .collect(),
            historial_pagos: pagos
                .iter()
                .map(|&monto| RegistroPago {
                    monto,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_estado() {
        assert_eq!(derive_estado(0.0, 200.0), EstadoPago::SinPago);
        assert_eq!(derive_estado(50.0, 200.0), EstadoPago::Abonado);
        assert_eq!(derive_estado(200.0, 200.0), EstadoPago::Pagado);
        assert_eq!(derive_estado(250.0, 200.0), EstadoPago::Pagado);
        assert_eq!(derive_estado(0.0, 0.0), EstadoPago::SinPago);
    }

    #[test]
    fn test_derive_estado_compares_cents() {
        // 0.1 + 0.2 != 0.3 in binary floating point
        assert_eq!(derive_estado(0.1 + 0.2, 0.3), EstadoPago::Pagado);
    }

    #[test]
    fn test_first_installment_then_full_payment() {
        let mut p = pedido(&[(100.0, 2.0)], &[]);
        let plan = plan_abono(&p, 50.0);
        assert_eq!(plan.estado, EstadoPago::Abonado);
        assert_eq!(plan.saldo(), 150.0);

        p.historial_pagos.push(RegistroPago {
            monto: 50.0,
            ..Default::default()
        });
        let plan = plan_abono(&p, 150.0);
        assert_eq!(plan.estado, EstadoPago::Pagado);
        assert_eq!(plan.pagado_despues, 200.0);
        assert_eq!(plan.saldo(), 0.0);
    }

    #[test]
    fn test_update_body() {
        let plan = plan_abono(&pedido(&[(100.0, 2.0)], &[]), 50.0);
        assert_eq!(
            serde_json::to_value(plan.update()).unwrap(),
            serde_json::json!({"pago": "abonado", "monto": 50.0})
        );
        assert_eq!(
            serde_json::to_value(PagoUpdate::manual(EstadoPago::Pagado)).unwrap(),
            serde_json::json!({"pago": "pagado"})
        );
    }

    #[test]
    fn test_parse_abono() {
        assert_eq!(parse_abono(" 50.5 "), Ok(50.5));
        assert_eq!(parse_abono(""), Err(PagoError::Empty));
        assert_eq!(parse_abono("abc"), Err(PagoError::NotANumber("abc".into())));
        assert_eq!(parse_abono("NaN"), Err(PagoError::NotANumber("NaN".into())));
        assert_eq!(parse_abono("0"), Err(PagoError::NotPositive));
        assert_eq!(parse_abono("-10"), Err(PagoError::NotPositive));
    }

    #[test]
    fn test_parse_abono_accepts_sub_cent_amounts() {
        assert_eq!(parse_abono("0.004"), Ok(0.004));
        assert_eq!(parse_abono("-0.004"), Err(PagoError::NotPositive));
    }

    #[test]
    fn test_consistency() {
        let mut p = pedido(&[(100.0, 2.0)], &[50.0]);
        p.pago = Some("abonado".into());
        assert!(is_consistent(&p));
        p.pago = Some("pagado".into());
        assert!(!is_consistent(&p));
    }

    #[test]
    fn test_pago_path() {
        assert_eq!(pago_path("66a1"), "/pedidos/66a1/pago");
    }
}
