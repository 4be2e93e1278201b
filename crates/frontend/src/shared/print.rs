//! Printing a standalone HTML document without leaving the page.
//!
//! The document is loaded into a hidden iframe appended to `<body>`; once it
//! has loaded, the frame's own window is printed. The frame is replaced on
//! the next print.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlIFrameElement;

const PRINT_FRAME_ID: &str = "print-frame";

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn print_html(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No hay ventana")?;
    let document = window.document().ok_or("No hay documento")?;
    let body = document.body().ok_or("No hay <body>")?;

    if let Some(previous) = document.get_element_by_id(PRINT_FRAME_ID) {
        previous.remove();
    }

    let frame: HtmlIFrameElement = document
        .create_element("iframe")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "No se pudo crear el marco de impresión".to_string())?;
    frame.set_id(PRINT_FRAME_ID);
    frame
        .style()
        .set_css_text("position:fixed;right:0;bottom:0;width:0;height:0;border:0;");

    let loaded = frame.clone();
    let on_load = Closure::once_into_js(move || {
        match loaded.content_window() {
            Some(win) => {
                if let Err(e) = win.print() {
                    log::error!("print failed: {:?}", e);
                }
            }
            None => log::error!("print frame has no window"),
        }
    });
    frame.set_onload(Some(on_load.unchecked_ref()));
    frame.set_srcdoc(html);

    body.append_child(&frame).map_err(js_err)?;
    Ok(())
}
