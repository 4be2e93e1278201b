use contracts::domain::a001_pedido::EstadoPago;
use leptos::prelude::*;

/// Variant: "primary", "success", "warning", "error" or "neutral" (default).
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}

pub fn estado_pago_variant(estado: EstadoPago) -> &'static str {
    match estado {
        EstadoPago::Pagado => "success",
        EstadoPago::Abonado => "warning",
        EstadoPago::SinPago => "error",
    }
}

#[component]
pub fn EstadoPagoBadge(#[prop(into)] estado: Signal<EstadoPago>) -> impl IntoView {
    view! {
        {move || {
            let estado = estado.get();
            view! {
                <Badge variant=estado_pago_variant(estado).to_string()>
                    {estado.label()}
                </Badge>
            }
        }}
    }
}
