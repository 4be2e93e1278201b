use super::registry::{
    TAB_INVENTARIO_CARGA, TAB_INVENTARIO_PREVIEW, TAB_PEDIDOS, TAB_RESUMEN_DIARIO,
    TAB_RESUMEN_RANGO,
};

/// Tab title for a key; empty for unknown keys.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        TAB_RESUMEN_DIARIO => "Resumen del día",
        TAB_RESUMEN_RANGO => "Resumen por rango",
        TAB_PEDIDOS => "Pedidos en proceso",
        TAB_INVENTARIO_CARGA => "Carga de inventario",
        TAB_INVENTARIO_PREVIEW => "Inventario actual",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        for key in [
            TAB_RESUMEN_DIARIO,
            TAB_RESUMEN_RANGO,
            TAB_PEDIDOS,
            TAB_INVENTARIO_CARGA,
            TAB_INVENTARIO_PREVIEW,
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "{}", key);
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }
}
