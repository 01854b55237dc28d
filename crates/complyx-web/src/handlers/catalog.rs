//! Regulation catalog endpoint, read by the dashboard collaborator.

use axum::Json;
use complyx_analysis::catalog::{RegulationDescriptor, CATALOG, SUPPORTED_REGULATIONS};
use serde::Serialize;

#[derive(Serialize)]
pub struct CatalogResponse {
    pub regulations: &'static [RegulationDescriptor],
    pub supported: &'static [&'static str],
}

pub async fn catalog_list() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        regulations: CATALOG,
        supported: SUPPORTED_REGULATIONS,
    })
}
