//! Upload flow of the inventory bulk loader.
//!
//! `Idle → FileSelected → Parsed → (Saving | Updating) → Idle`, with `Failed`
//! reachable from parsing and saving. Selecting a new file or cancelling
//! leaves `Failed`.

use contracts::domain::a002_inventario::InventarioItem;
use leptos::prelude::*;

pub const PARSE_ERROR_MESSAGE: &str =
    "Error al leer el archivo de Excel. Asegúrate de que el formato es correcto.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CargaFase {
    #[default]
    Idle,
    FileSelected,
    Parsed,
    Saving,
    Updating,
    Failed,
}

/// Both actions post the same payload to `/inventario/bulk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModoGuardado {
    Nuevo,
    Actualizar,
}

impl ModoGuardado {
    fn fase(self) -> CargaFase {
        match self {
            ModoGuardado::Nuevo => CargaFase::Saving,
            ModoGuardado::Actualizar => CargaFase::Updating,
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            ModoGuardado::Nuevo => "No hay items para guardar.",
            ModoGuardado::Actualizar => "No hay items para actualizar.",
        }
    }

    fn progress_message(self) -> &'static str {
        match self {
            ModoGuardado::Nuevo => "Guardando nuevo inventario...",
            ModoGuardado::Actualizar => "Actualizando inventario existente...",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            ModoGuardado::Nuevo => "Nuevo inventario guardado correctamente.",
            ModoGuardado::Actualizar => "Inventario actualizado correctamente.",
        }
    }

    fn error_prefix(self) -> &'static str {
        match self {
            ModoGuardado::Nuevo => "Error al guardar el nuevo inventario",
            ModoGuardado::Actualizar => "Error al actualizar el inventario",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MensajeTipo {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mensaje {
    pub tipo: MensajeTipo,
    pub texto: String,
}

impl Mensaje {
    fn new(tipo: MensajeTipo, texto: impl Into<String>) -> Self {
        Self {
            tipo,
            texto: texto.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.tipo {
            MensajeTipo::Info => "alert alert--info",
            MensajeTipo::Success => "alert alert--success",
            MensajeTipo::Error => "alert alert--error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CargaInventarioState {
    pub fase: CargaFase,
    pub file_name: Option<String>,
    pub items: Vec<InventarioItem>,
    pub mensaje: Option<Mensaje>,
    /// Bumped on every file selection and on cancel; a parse result is
    /// applied only if its token is still current.
    parse_token: u64,
}

impl CargaInventarioState {
    pub fn is_busy(&self) -> bool {
        matches!(self.fase, CargaFase::Saving | CargaFase::Updating)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.items.is_empty()
    }

    /// Returns the token the matching [`finish_parse`](Self::finish_parse) must pass.
    pub fn select_file(&mut self, file_name: String) -> u64 {
        self.parse_token += 1;
        self.fase = CargaFase::FileSelected;
        self.file_name = Some(file_name);
        self.items.clear();
        self.mensaje = None;
        self.parse_token
    }

    /// Returns `false` and leaves the state alone when the result belongs to
    /// a file that was cancelled or replaced meanwhile.
    pub fn finish_parse(
        &mut self,
        token: u64,
        result: Result<Vec<InventarioItem>, String>,
    ) -> bool {
        if token != self.parse_token {
            return false;
        }
        match result {
            Ok(items) => {
                self.mensaje = Some(Mensaje::new(
                    MensajeTipo::Success,
                    format!("Se cargaron {} items del archivo.", items.len()),
                ));
                self.items = items;
                self.fase = CargaFase::Parsed;
            }
            Err(detail) => {
                self.items.clear();
                self.mensaje = Some(Mensaje::new(
                    MensajeTipo::Error,
                    format!("{} {}", PARSE_ERROR_MESSAGE, detail),
                ));
                self.fase = CargaFase::Failed;
            }
        }
        true
    }

    /// Items to send, or `None` when there is nothing to send (the message
    /// says so and no request is made).
    pub fn begin_save(&mut self, modo: ModoGuardado) -> Option<Vec<InventarioItem>> {
        if self.is_busy() {
            return None;
        }
        if self.items.is_empty() {
            self.mensaje = Some(Mensaje::new(MensajeTipo::Error, modo.empty_message()));
            return None;
        }
        self.fase = modo.fase();
        self.mensaje = Some(Mensaje::new(MensajeTipo::Info, modo.progress_message()));
        Some(self.items.clone())
    }

    pub fn save_succeeded(&mut self, modo: ModoGuardado) {
        self.fase = CargaFase::Idle;
        self.items.clear();
        self.file_name = None;
        self.mensaje = Some(Mensaje::new(MensajeTipo::Success, modo.success_message()));
    }

    /// Items are kept so the user can retry.
    pub fn save_failed(&mut self, modo: ModoGuardado, error: &str) {
        self.fase = CargaFase::Failed;
        self.mensaje = Some(Mensaje::new(
            MensajeTipo::Error,
            format!("{}: {}", modo.error_prefix(), error),
        ));
    }

    pub fn cancel(&mut self) {
        *self = Self {
            parse_token: self.parse_token + 1,
            ..Self::default()
        };
    }
}

pub fn create_state() -> RwSignal<CargaInventarioState> {
    RwSignal::new(CargaInventarioState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(codigo: &str) -> InventarioItem {
        InventarioItem {
            codigo: codigo.to_string(),
            ..Default::default()
        }
    }

    fn parsed_state() -> CargaInventarioState {
        let mut state = CargaInventarioState::default();
        let token = state.select_file("inventario.xlsx".to_string());
        assert!(state.finish_parse(token, Ok(vec![item("A1"), item("A2")])));
        state
    }

    #[test]
    fn test_parse_success() {
        let state = parsed_state();
        assert_eq!(state.fase, CargaFase::Parsed);
        assert_eq!(state.items.len(), 2);
        assert_eq!(
            state.mensaje.unwrap().texto,
            "Se cargaron 2 items del archivo."
        );
    }

    #[test]
    fn test_parse_failure_clears_items() {
        let mut state = parsed_state();
        let token = state.select_file("roto.xlsx".to_string());
        state.finish_parse(token, Err("Fila 3, columna 'precio'".to_string()));
        assert_eq!(state.fase, CargaFase::Failed);
        assert!(state.items.is_empty());
        let mensaje = state.mensaje.unwrap();
        assert_eq!(mensaje.tipo, MensajeTipo::Error);
        assert!(mensaje.texto.starts_with(PARSE_ERROR_MESSAGE));
        assert!(mensaje.texto.ends_with("Fila 3, columna 'precio'"));
    }

    #[test]
    fn test_save_without_items_makes_no_request() {
        let mut state = CargaInventarioState::default();
        assert!(state.begin_save(ModoGuardado::Nuevo).is_none());
        assert_eq!(state.mensaje.as_ref().unwrap().texto, "No hay items para guardar.");
        assert!(state.begin_save(ModoGuardado::Actualizar).is_none());
        assert_eq!(state.mensaje.unwrap().texto, "No hay items para actualizar.");
        assert_eq!(state.fase, CargaFase::Idle);
    }

    #[test]
    fn test_save_round() {
        let mut state = parsed_state();
        let payload = state.begin_save(ModoGuardado::Actualizar).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(state.fase, CargaFase::Updating);
        assert!(state.is_busy());
        assert!(state.begin_save(ModoGuardado::Nuevo).is_none());

        state.save_succeeded(ModoGuardado::Actualizar);
        assert_eq!(state.fase, CargaFase::Idle);
        assert!(state.items.is_empty());
        assert!(state.file_name.is_none());
        assert_eq!(
            state.mensaje.unwrap().texto,
            "Inventario actualizado correctamente."
        );
    }

    #[test]
    fn test_save_failure_keeps_items() {
        let mut state = parsed_state();
        state.begin_save(ModoGuardado::Nuevo);
        state.save_failed(ModoGuardado::Nuevo, "Error en la petición: 500 boom");
        assert_eq!(state.fase, CargaFase::Failed);
        assert_eq!(state.items.len(), 2);
        assert!(state.can_submit());
        assert_eq!(
            state.mensaje.unwrap().texto,
            "Error al guardar el nuevo inventario: Error en la petición: 500 boom"
        );
    }

    #[test]
    fn test_cancel_resets() {
        let mut state = parsed_state();
        state.cancel();
        assert_eq!(state.fase, CargaFase::Idle);
        assert!(state.file_name.is_none());
        assert!(state.items.is_empty());
        assert!(state.mensaje.is_none());
    }

    #[test]
    fn test_parse_after_cancel_is_dropped() {
        let mut state = CargaInventarioState::default();
        let token = state.select_file("inventario.xlsx".to_string());
        state.cancel();
        assert!(!state.finish_parse(token, Ok(vec![item("A1")])));
        assert_eq!(state.fase, CargaFase::Idle);
        assert!(state.items.is_empty());
        assert!(state.mensaje.is_none());
    }

    #[test]
    fn test_parse_of_replaced_file_is_dropped() {
        let mut state = CargaInventarioState::default();
        let first = state.select_file("inventario.xlsx".to_string());
        let second = state.select_file("inventario.xlsx".to_string());
        assert!(!state.finish_parse(first, Ok(vec![item("A1"), item("A2")])));
        assert_eq!(state.fase, CargaFase::FileSelected);
        assert!(state.finish_parse(second, Ok(vec![item("B1")])));
        assert_eq!(state.items, vec![item("B1")]);
    }
}
