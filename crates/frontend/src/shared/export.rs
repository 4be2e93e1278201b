//! Table export to `.xlsx` (SheetJS) and `.pdf` (jsPDF + autotable).
//!
//! Both libraries are loaded by `index.html`; `assets/js/sheet_bridge.js`
//! exposes the two globals bound here.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = exportXlsx, catch)]
    fn export_xlsx_js(rows: JsValue, sheet_name: &str, file_name: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = exportPdfTable, catch)]
    fn export_pdf_js(
        title: &str,
        headers: JsValue,
        rows: JsValue,
        file_name: &str,
    ) -> Result<(), JsValue>;
}

/// Types that can be written as one row of an exported table.
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    /// Cells in `headers()` order. Numbers stay numeric in the workbook.
    fn to_row(&self) -> Vec<Value>;
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| format!("Error al preparar los datos: {}", e))
}

fn js_error(context: &str, err: JsValue) -> String {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err));
    format!("{}: {}", context, detail)
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Writes `data` as a single-sheet workbook, header row first.
pub fn export_xlsx<T: ExcelExportable>(
    data: &[T],
    sheet_name: &str,
    file_name: &str,
) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(data.len() + 1);
    rows.push(
        T::headers()
            .into_iter()
            .map(|h| Value::String(h.to_string()))
            .collect(),
    );
    rows.extend(data.iter().map(|item| item.to_row()));

    export_xlsx_js(to_js(&rows)?, sheet_name, file_name)
        .map_err(|e| js_error("Error al exportar Excel", e))
}

/// Writes `data` as a titled PDF table.
pub fn export_pdf<T: ExcelExportable>(
    data: &[T],
    title: &str,
    file_name: &str,
) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }

    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|item| item.to_row().iter().map(cell_text).collect())
        .collect();

    export_pdf_js(title, to_js(&T::headers())?, to_js(&rows)?, file_name)
        .map_err(|e| js_error("Error al exportar PDF", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("ABC-1")), "ABC-1");
        assert_eq!(cell_text(&json!(12.5)), "12.5");
        assert_eq!(cell_text(&json!(3)), "3");
        assert_eq!(cell_text(&Value::Null), "");
    }
}
