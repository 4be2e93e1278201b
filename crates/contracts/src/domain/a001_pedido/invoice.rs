//! Invoice/receipt document built from an order.
//!
//! The same document feeds the on-screen preview and the printable HTML.

use super::aggregate::{EstadoPago, Pedido};
use super::company::CompanyDetails;
use crate::shared::format::{format_date, format_money, format_number_with_decimals};

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub codigo: String,
    pub descripcion: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceAbono {
    pub fecha: String,
    pub monto: f64,
    pub estado: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub titulo: &'static str,
    pub pedido_id: String,
    pub empresa: Option<CompanyDetails>,
    pub cliente: String,
    pub lineas: Vec<InvoiceLine>,
    pub abonos: Vec<InvoiceAbono>,
    pub total_pedido: f64,
    pub total_abonado: f64,
    /// Always `total_pedido - total_abonado`
    pub monto_pendiente: f64,
}

impl InvoiceDocument {
    pub fn build(pedido: &Pedido, empresa: Option<&CompanyDetails>) -> Self {
        let titulo = match pedido.estado_pago() {
            EstadoPago::Pagado => "Nota de Entrega",
            _ => "Comprobante de Abono",
        };

        let lineas = pedido
            .items
            .iter()
            .map(|item| InvoiceLine {
                codigo: item.codigo.clone().unwrap_or_default(),
                descripcion: item.display_name(),
                cantidad: item.cantidad,
                precio_unitario: item.precio,
                total: item.subtotal(),
            })
            .collect();

        let abonos = pedido
            .historial_pagos
            .iter()
            .map(|p| InvoiceAbono {
                fecha: format_date(&p.fecha),
                monto: p.monto,
                estado: p.estado.clone().unwrap_or_default(),
            })
            .collect();

        let total_pedido = pedido.total();
        let total_abonado = pedido.total_pagado();

        Self {
            titulo,
            pedido_id: pedido.id.clone(),
            empresa: empresa.cloned(),
            cliente: pedido.cliente().to_string(),
            lineas,
            abonos,
            total_pedido,
            total_abonado,
            monto_pendiente: total_pedido - total_abonado,
        }
    }

    /// Standalone HTML document for the print frame. All values are escaped.
    pub fn to_print_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        html.push_str(&format!("<title>{}</title>", escape_html(self.titulo)));
        html.push_str(PRINT_STYLE);
        html.push_str("</head><body>");

        html.push_str(&format!("<h1>{}</h1>", escape_html(self.titulo)));

        if let Some(empresa) = &self.empresa {
            html.push_str("<div class=\"empresa\">");
            html.push_str(&format!("<p class=\"nombre\">{}</p>", escape_html(&empresa.nombre)));
            html.push_str(&format!("<p>RIF: {}</p>", escape_html(&empresa.rif)));
            html.push_str(&format!("<p>Dirección: {}</p>", escape_html(&empresa.direccion)));
            html.push_str(&format!("<p>Teléfono: {}</p>", escape_html(&empresa.telefono)));
            html.push_str(&format!("<p>Email: {}</p>", escape_html(&empresa.email)));
            html.push_str("</div>");
        }

        html.push_str(&format!(
            "<p class=\"cliente\">Cliente: {}</p>",
            escape_html(&self.cliente)
        ));

        html.push_str("<h2>Items del Pedido</h2><table><thead><tr>");
        html.push_str("<th>Código</th><th>Descripción</th><th>Cantidad</th><th>Precio Unitario</th><th>Total Item</th>");
        html.push_str("</tr></thead><tbody>");
        for linea in &self.lineas {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                escape_html(&linea.codigo),
                escape_html(&linea.descripcion),
                format_cantidad(linea.cantidad),
                format_money(linea.precio_unitario),
                format_money(linea.total),
            ));
        }
        html.push_str("</tbody></table>");

        html.push_str("<h2>Historial de Abonos</h2><table><thead><tr>");
        html.push_str("<th>Fecha</th><th>Monto Abonado</th><th>Estado</th>");
        html.push_str("</tr></thead><tbody>");
        for abono in &self.abonos {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"num\">{}</td><td>{}</td></tr>",
                escape_html(&abono.fecha),
                format_money(abono.monto),
                escape_html(&abono.estado),
            ));
        }
        html.push_str("</tbody></table>");

        html.push_str("<div class=\"totales\">");
        html.push_str(&format!("<p>Total Pedido: {}</p>", format_money(self.total_pedido)));
        html.push_str(&format!("<p>Total Abonado: {}</p>", format_money(self.total_abonado)));
        html.push_str(&format!(
            "<p>Monto Pendiente: {}</p>",
            format_money(self.monto_pendiente)
        ));
        html.push_str("</div></body></html>");
        html
    }
}

const PRINT_STYLE: &str = "<style>\
body{font-family:sans-serif;font-size:12px;margin:24px;color:#222}\
h1{text-align:center;font-size:20px}\
h2{font-size:14px;margin-top:16px}\
.empresa{text-align:center;border-bottom:1px solid #ccc;padding-bottom:8px}\
.empresa .nombre{font-weight:bold;font-size:16px}\
table{width:100%;border-collapse:collapse}\
th,td{border-bottom:1px solid #ddd;padding:4px 6px;text-align:left}\
td.num{text-align:right}\
.totales{text-align:right;font-weight:bold;margin-top:16px}\
</style>";

/// Quantities print without decimals when whole.
pub fn format_cantidad(value: f64) -> String {
    if value.fract() == 0.0 {
        format_number_with_decimals(value, 0)
    } else {
        format_number_with_decimals(value, 2)
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pedido::{PedidoItem, RegistroPago};

    fn pedido(pago: &str) -> Pedido {
        Pedido {
            id: "66a1b2c3".into(),
            cliente_nombre: Some("Ana <Pérez>".into()),
            pago: Some(pago.into()),
            items: vec![PedidoItem {
                codigo: Some("P-01".into()),
                nombre: Some("Puerta".into()),
                descripcion: Some("Cedro".into()),
                precio: 100.0,
                cantidad: 2.0,
                ..Default::default()
            }],
            historial_pagos: vec![RegistroPago {
                monto: 50.0,
                fecha: "2024-05-01T10:00:00Z".into(),
                estado: Some("abonado".into()),
                ..Default::default()
            }],
            // Stale server value must not leak into totals
            total_abonado: Some(999.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_follows_status() {
        assert_eq!(InvoiceDocument::build(&pedido("pagado"), None).titulo, "Nota de Entrega");
        assert_eq!(
            InvoiceDocument::build(&pedido("abonado"), None).titulo,
            "Comprobante de Abono"
        );
    }

    #[test]
    fn test_totals_are_computed() {
        let doc = InvoiceDocument::build(&pedido("abonado"), None);
        assert_eq!(doc.total_pedido, 200.0);
        assert_eq!(doc.total_abonado, 50.0);
        assert_eq!(doc.monto_pendiente, 150.0);
        assert_eq!(doc.lineas[0].descripcion, "Puerta - Cedro");
        assert_eq!(doc.lineas[0].total, 200.0);
        assert_eq!(doc.abonos[0].fecha, "01/05/2024");
    }

    #[test]
    fn test_print_html_is_escaped() {
        let empresa = CompanyDetails {
            nombre: "Puertas & Co".into(),
            rif: "J-123".into(),
            ..Default::default()
        };
        let html = InvoiceDocument::build(&pedido("abonado"), Some(&empresa)).to_print_html();
        assert!(html.contains("Cliente: Ana &lt;Pérez&gt;"));
        assert!(html.contains("Puertas &amp; Co"));
        assert!(html.contains("RIF: J-123"));
        assert!(html.contains("Monto Pendiente: $150.00"));
        assert!(!html.contains("<Pérez>"));
    }

    #[test]
    fn test_format_cantidad() {
        assert_eq!(format_cantidad(2.0), "2");
        assert_eq!(format_cantidad(1.5), "1.50");
    }
}
