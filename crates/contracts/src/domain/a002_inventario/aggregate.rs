use crate::shared::serde_ext::null_to_default;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const INVENTARIO_ALL_PATH: &str = "/inventario/all";
pub const INVENTARIO_BULK_PATH: &str = "/inventario/bulk";

/// Inventory item as sent to `/inventario/bulk` and listed by `/inventario/all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventarioItem {
    #[serde(default, deserialize_with = "null_to_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub descripcion: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub categoria: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub modelo: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub costo: f64,
    #[serde(rename = "costoProduccion", default, deserialize_with = "null_to_default")]
    pub costo_produccion: f64,
    /// Stock on hand; `existencia` in spreadsheets
    #[serde(default, deserialize_with = "null_to_default")]
    pub cantidad: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub precio: f64,
    #[serde(default = "default_activo")]
    pub activo: bool,
    #[serde(default, deserialize_with = "null_to_default")]
    pub imagenes: Vec<String>,
}

fn default_activo() -> bool {
    true
}

impl InventarioItem {
    /// Columns of the preview table and of both exports.
    pub const EXPORT_HEADERS: [&'static str; 6] =
        ["Código", "Descripción", "Modelo", "Costo", "Existencia", "Precio"];

    /// Cells in [`Self::EXPORT_HEADERS`] order; numbers stay numeric.
    pub fn export_row(&self) -> Vec<Value> {
        vec![
            Value::from(self.codigo.as_str()),
            Value::from(self.descripcion.as_str()),
            Value::from(self.modelo.as_str()),
            Value::from(self.costo),
            Value::from(self.cantidad),
            Value::from(self.precio),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let item = InventarioItem {
            codigo: "A1".into(),
            costo_produccion: 12.5,
            activo: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["costoProduccion"], 12.5);
        assert_eq!(json["activo"], true);
        assert_eq!(json["imagenes"], serde_json::json!([]));
    }

    #[test]
    fn test_listing_with_gaps() {
        let item: InventarioItem =
            serde_json::from_str(r#"{"codigo": "A1", "precio": null, "_id": "x"}"#).unwrap();
        assert_eq!(item.precio, 0.0);
        assert!(item.activo);
        assert_eq!(
            item.export_row(),
            vec![
                Value::from("A1"),
                Value::from(""),
                Value::from(""),
                Value::from(0.0),
                Value::from(0.0),
                Value::from(0.0)
            ]
        );
    }
}
