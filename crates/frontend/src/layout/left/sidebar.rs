//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::{
    TAB_INVENTARIO_CARGA, TAB_INVENTARIO_PREVIEW, TAB_PEDIDOS, TAB_RESUMEN_DIARIO,
    TAB_RESUMEN_RANGO,
};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "ventas",
            label: "Ventas",
            icon: "bar-chart",
            items: vec![
                (TAB_RESUMEN_DIARIO, tab_label_for_key(TAB_RESUMEN_DIARIO), "calendar"),
                (TAB_RESUMEN_RANGO, tab_label_for_key(TAB_RESUMEN_RANGO), "bar-chart"),
            ],
        },
        MenuGroup {
            id: "pedidos",
            label: "Pedidos",
            icon: "orders",
            items: vec![(TAB_PEDIDOS, tab_label_for_key(TAB_PEDIDOS), "payments")],
        },
        MenuGroup {
            id: "inventario",
            label: "Inventario",
            icon: "inventory",
            items: vec![
                (TAB_INVENTARIO_CARGA, tab_label_for_key(TAB_INVENTARIO_CARGA), "upload"),
                (TAB_INVENTARIO_PREVIEW, tab_label_for_key(TAB_INVENTARIO_PREVIEW), "file"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(
        groups.iter().map(|g| g.id.to_string()).collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.get().contains(&group_id_for_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
