use contracts::dashboards::d400_resumen_venta::{
    ResumenDiarioResponse, ResumenQuery, ResumenVenta, ResumenVentaDiariaResponse,
};
use contracts::shared::api::ApiError;
use web_sys::AbortSignal;

use crate::shared::api_utils::ApiClient;

/// Fetches either summary endpoint and normalizes the answer.
pub async fn fetch_resumen(
    api: &ApiClient,
    query: &ResumenQuery,
    signal: Option<&AbortSignal>,
) -> Result<ResumenVenta, ApiError> {
    let path = query.path();
    match query {
        ResumenQuery::Dia { .. } => {
            let response: ResumenDiarioResponse = api.get_json(&path, signal).await?;
            Ok(ResumenVenta::from(response))
        }
        ResumenQuery::Rango { .. } => {
            let response: ResumenVentaDiariaResponse = api.get_json(&path, signal).await?;
            Ok(ResumenVenta::from_rango(response, query))
        }
    }
}
