use contracts::domain::a001_pedido::company::{CompanyDetails, COMPANY_DETAILS_PATH};
use contracts::domain::a001_pedido::filter::PedidosQuery;
use contracts::domain::a001_pedido::payment::{pago_path, PagoUpdate};
use contracts::domain::a001_pedido::Pedido;
use contracts::shared::api::ApiError;
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;

/// Orders in any of the in-process stages, optionally bounded by creation date.
pub async fn fetch_pedidos(
    api: &ApiClient,
    query: &PedidosQuery,
    signal: Option<&AbortSignal>,
) -> Result<Vec<Pedido>, ApiError> {
    api.get_json(&query.path(), signal).await
}

pub async fn fetch_company_details(
    api: &ApiClient,
    signal: Option<&AbortSignal>,
) -> Result<CompanyDetails, ApiError> {
    api.get_json(COMPANY_DETAILS_PATH, signal).await
}

/// The response body is not used; callers re-fetch the list.
pub async fn update_pago(
    api: &ApiClient,
    pedido_id: &str,
    update: &PagoUpdate,
    signal: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    api.patch_json::<_, serde_json::Value>(&pago_path(pedido_id), update, signal)
        .await
        .map(|_| ())
}
