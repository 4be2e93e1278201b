//! Spreadsheet row to [`InventarioItem`] mapping.
//!
//! Headers are matched case-insensitively (see [`SheetTable`]).

use thiserror::Error;

use super::aggregate::InventarioItem;
use crate::shared::sheet::{SheetRow, SheetTable};

pub const DEFAULT_NOMBRE: &str = "Sin Nombre";
pub const DEFAULT_CATEGORIA: &str = "General";

/// Columns the upload form advertises.
pub const EXPECTED_COLUMNS: [&str; 6] = ["codigo", "descripcion", "modelo", "costo", "existencia", "precio"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExcelRowError {
    #[error("Fila {line}, columna '{column}': \"{value}\" no es un número")]
    NotANumber {
        line: usize,
        column: String,
        value: String,
    },
}

fn number(row: &SheetRow, columns: &[&str]) -> Result<Option<f64>, ExcelRowError> {
    for column in columns {
        if let Some(raw) = row.text(column) {
            return match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(ExcelRowError::NotANumber {
                    line: row.line,
                    column: column.to_string(),
                    value: raw.to_string(),
                }),
            };
        }
    }
    Ok(None)
}

fn text(row: &SheetRow, column: &str) -> String {
    row.text(column).unwrap_or_default().to_string()
}

pub fn item_from_row(row: &SheetRow) -> Result<InventarioItem, ExcelRowError> {
    let costo = number(row, &["costo"])?.unwrap_or(0.0);
    let costo_produccion = number(row, &["costoproduccion"])?.unwrap_or(costo);

    Ok(InventarioItem {
        codigo: text(row, "codigo"),
        nombre: row
            .first_text(&["nombre", "descripcion"])
            .unwrap_or(DEFAULT_NOMBRE)
            .to_string(),
        descripcion: text(row, "descripcion"),
        categoria: row.text("categoria").unwrap_or(DEFAULT_CATEGORIA).to_string(),
        modelo: text(row, "modelo"),
        costo,
        costo_produccion,
        cantidad: number(row, &["existencia", "cantidad"])?.unwrap_or(0.0),
        precio: number(row, &["precio"])?.unwrap_or(0.0),
        activo: true,
        imagenes: Vec::new(),
    })
}

/// Map every data row; the first bad cell fails the whole file.
pub fn items_from_table(table: &SheetTable) -> Result<Vec<InventarioItem>, ExcelRowError> {
    table.rows.iter().map(item_from_row).collect()
}

/// Raw bridge output straight to items.
pub fn items_from_raw(raw_data: Vec<Vec<String>>) -> Result<Vec<InventarioItem>, String> {
    let table = SheetTable::from_raw(raw_data)?;
    items_from_table(&table).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_full_row() {
        let items = items_from_raw(raw(&[
            &["codigo", "nombre", "descripcion", "categoria", "modelo", "costo", "costoProduccion", "existencia", "precio"],
            &["P-01", "Puerta", "Cedro 80", "Puertas", "M1", "50", "55", "3", "120.5"],
        ]))
        .unwrap();
        let item = &items[0];
        assert_eq!(item.codigo, "P-01");
        assert_eq!(item.nombre, "Puerta");
        assert_eq!(item.categoria, "Puertas");
        assert_eq!(item.costo_produccion, 55.0);
        assert_eq!(item.cantidad, 3.0);
        assert_eq!(item.precio, 120.5);
        assert!(item.activo);
        assert!(item.imagenes.is_empty());
    }

    #[test]
    fn test_defaults() {
        let items = items_from_raw(raw(&[
            &["codigo", "descripcion", "modelo", "costo", "existencia", "precio"],
            &["A1", "Marco pino", "", "40", "", ""],
            &["A2", "", "", "", "", ""],
        ]))
        .unwrap();
        assert_eq!(items[0].nombre, "Marco pino");
        assert_eq!(items[0].categoria, "General");
        assert_eq!(items[0].costo_produccion, 40.0);
        assert_eq!(items[0].cantidad, 0.0);
        assert_eq!(items[0].precio, 0.0);
        assert_eq!(items[1].nombre, "Sin Nombre");
        assert_eq!(items[1].descripcion, "");
        assert_eq!(items[1].costo_produccion, 0.0);
    }

    #[test]
    fn test_explicit_zero_production_cost_is_kept() {
        let items = items_from_raw(raw(&[&["costo", "costoproduccion"], &["40", "0"]])).unwrap();
        assert_eq!(items[0].costo_produccion, 0.0);
    }

    #[test]
    fn test_cantidad_alias() {
        let items = items_from_raw(raw(&[&["codigo", "Cantidad"], &["A1", "7"]])).unwrap();
        assert_eq!(items[0].cantidad, 7.0);
    }

    #[test]
    fn test_non_numeric_cell_names_row_and_column() {
        let err = items_from_raw(raw(&[
            &["codigo", "precio"],
            &["A1", "10"],
            &["A2", "diez"],
        ]))
        .unwrap_err();
        assert_eq!(err, "Fila 3, columna 'precio': \"diez\" no es un número");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let items = items_from_raw(raw(&[&["codigo"], &[""], &["A1"], &[]])).unwrap();
        assert_eq!(items.len(), 1);
    }
}
