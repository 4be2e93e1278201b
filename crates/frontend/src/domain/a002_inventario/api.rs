use contracts::domain::a002_inventario::aggregate::{INVENTARIO_ALL_PATH, INVENTARIO_BULK_PATH};
use contracts::domain::a002_inventario::InventarioItem;
use contracts::shared::api::ApiError;
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;

/// Creates or updates every item by `codigo`; the backend decides which.
pub async fn bulk_save(
    api: &ApiClient,
    items: &[InventarioItem],
    signal: Option<&AbortSignal>,
) -> Result<(), ApiError> {
    log::info!("POST {} ({} items)", INVENTARIO_BULK_PATH, items.len());
    api.post_json::<_, serde_json::Value>(INVENTARIO_BULK_PATH, &items, signal)
        .await
        .map(|_| ())
}

pub async fn fetch_all(
    api: &ApiClient,
    signal: Option<&AbortSignal>,
) -> Result<Vec<InventarioItem>, ApiError> {
    api.get_json(INVENTARIO_ALL_PATH, signal).await
}
