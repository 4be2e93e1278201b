use wasm_bindgen::prelude::*;

/// SheetJS binding from `assets/js/sheet_bridge.js`
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Reads the first sheet of a `.xlsx`/`.xls` file as string rows, header row first.
pub async fn read_excel_from_file(file: web_sys::File) -> Result<Vec<Vec<String>>, String> {
    use wasm_bindgen_futures::JsFuture;

    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Error al leer el archivo: {:?}", e))?;

    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    let result =
        parse_excel_file(&bytes).map_err(|e| format!("Error al procesar el Excel: {:?}", e))?;

    parse_js_array_to_vec(result)
}

fn parse_js_array_to_vec(js_value: JsValue) -> Result<Vec<Vec<String>>, String> {
    if !js_value.is_array() {
        return Err("El resultado de la lectura no es una tabla".to_string());
    }

    let array = js_sys::Array::from(&js_value);
    let mut result = Vec::with_capacity(array.length() as usize);

    for i in 0..array.length() {
        let row_value = array.get(i);
        if !row_value.is_array() {
            continue;
        }

        let row = js_sys::Array::from(&row_value)
            .iter()
            .map(|cell| {
                if cell.is_null() || cell.is_undefined() {
                    String::new()
                } else {
                    cell.as_string()
                        .or_else(|| cell.as_f64().map(|n| n.to_string()))
                        .unwrap_or_default()
                }
            })
            .collect();

        result.push(row);
    }

    Ok(result)
}
