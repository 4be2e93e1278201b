use crate::shared::serde_ext::null_to_default;
use serde::{Deserialize, Serialize};

pub const COMPANY_DETAILS_PATH: &str = "/pedidos/company-details";

/// Issuer data printed on invoice headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    #[serde(default, deserialize_with = "null_to_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub rif: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub direccion: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub telefono: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub email: String,
}
