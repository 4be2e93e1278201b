mod state;

pub use state::{CargaFase, CargaInventarioState, ModoGuardado};

use contracts::domain::a002_inventario::excel::{items_from_raw, EXPECTED_COLUMNS};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use self::state::create_state;
use super::preview::{InventarioPanel, InventarioTable};
use crate::domain::a002_inventario::api;
use crate::shared::api_utils::{use_api, AbortOnCleanup};
use crate::shared::excel_importer::read_excel_from_file;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

/// Spreadsheet upload: parse, review, then save as new or update.
#[component]
pub fn CargaInventario() -> impl IntoView {
    let api = use_api();
    let abort = AbortOnCleanup::new();
    let state = create_state();
    let file_input = NodeRef::<html::Input>::new();

    let show_inventario = RwSignal::new(false);
    let refresh = RwSignal::new(0u32);

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let file_name = file.name();
        log::info!("Reading inventory file {}", file_name);
        let Some(token) = state.try_update(|s| s.select_file(file_name)) else {
            return;
        };

        spawn_local(async move {
            let result = read_excel_from_file(file).await.and_then(items_from_raw);
            if let Err(e) = &result {
                log::error!("Inventory file rejected: {}", e);
            }
            let applied = state.try_update(|s| s.finish_parse(token, result));
            if applied == Some(false) {
                log::debug!("Dropped parse result of a cancelled or replaced file");
            }
        });
    };

    let save = StoredValue::new(move |modo: ModoGuardado| {
        let Some(items) = state.try_update(|s| s.begin_save(modo)).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let signal = abort.signal();
            match api::bulk_save(&api, &items, signal.as_ref()).await {
                Ok(()) => {
                    state.update(|s| s.save_succeeded(modo));
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    show_inventario.set(true);
                    refresh.update(|n| *n += 1);
                }
                Err(e) if e.is_aborted() => {}
                Err(e) => state.update(|s| s.save_failed(modo, &e.to_string())),
            }
        });
    });

    let on_cancel = move |_| {
        state.update(|s| s.cancel());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let busy = Signal::derive(move || state.with(|s| s.is_busy()));
    let submit_disabled = Signal::derive(move || !state.with(|s| s.can_submit()));
    let items = Signal::derive(move || state.with(|s| s.items.clone()));

    view! {
        <PageFrame page_id="a002_inventario--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cargar Inventario desde Excel"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            show_inventario.set(true);
                            refresh.update(|n| *n += 1);
                        }
                    >
                        {icon("eye")}
                        " Ver inventario actual"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <p class="carga__hint">
                    "Selecciona un archivo de Excel (.xlsx) con las columnas: "
                    {EXPECTED_COLUMNS.join(", ")}
                    "."
                </p>

                <Flex align=FlexAlign::Center gap=FlexGap::Medium>
                    <input
                        type="file"
                        accept=".xlsx, .xls"
                        class="carga__file"
                        node_ref=file_input
                        disabled=busy
                        on:change=on_file_change
                    />
                    {move || state.with(|s| s.file_name.clone()).map(|name| view! {
                        <span class="carga__file-name">{name}</span>
                        <Button appearance=ButtonAppearance::Subtle on_click=on_cancel>
                            {icon("x")}
                            " Cancelar"
                        </Button>
                    })}
                </Flex>

                {move || state.with(|s| s.mensaje.clone()).map(|m| view! {
                    <div class=m.class()>{m.texto.clone()}</div>
                })}

                <Show when=move || state.with(|s| s.fase == CargaFase::FileSelected)>
                    <div class="table__loading">"Leyendo archivo..."</div>
                </Show>

                <Show when=move || state.with(|s| !s.items.is_empty())>
                    <Flex gap=FlexGap::Small class="carga__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submit_disabled
                            on_click=move |_| save.with_value(|f| f(ModoGuardado::Nuevo))
                        >
                            {icon("upload")}
                            " Guardar como nuevo inventario"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=submit_disabled
                            on_click=move |_| save.with_value(|f| f(ModoGuardado::Actualizar))
                        >
                            {icon("refresh")}
                            " Actualizar inventario existente"
                        </Button>
                    </Flex>
                    <h2 class="carga__subtitle">"Vista previa del archivo"</h2>
                    <InventarioTable items=items />
                </Show>

                <Show when=move || show_inventario.get()>
                    <InventarioPanel refresh=refresh />
                </Show>
            </div>
        </PageFrame>
    }
}
