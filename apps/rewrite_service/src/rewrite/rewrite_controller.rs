use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use super::{
    catalog::{grouped, CatalogGroup, LANGUAGES, TONES},
    rewrite_types::{RewriteRequest, RewriteResponse, RewriteType},
};
use crate::{app_module::AppState, error::RewriteError};

#[derive(Debug, Serialize)]
pub struct RewriteTypeOption {
    pub value: RewriteType,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub languages: Vec<CatalogGroup>,
    pub tones: Vec<CatalogGroup>,
    pub types: Vec<RewriteTypeOption>,
}

pub fn rewrite_router() -> Router {
    Router::new()
        .route("/rewrite", post(rewrite))
        .route("/options", get(options))
}

pub async fn rewrite(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<RewriteRequest>, JsonRejection>,
) -> Result<Json<RewriteResponse>, RewriteError> {
    let Json(request) = payload?;

    let span = tracing::info_span!("rewrite", request_id = %Uuid::new_v4());
    let result = ctx
        .service
        .rewrite_service
        .rewrite(&request)
        .instrument(span)
        .await?;

    Ok(Json(RewriteResponse::success(result)))
}

pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        languages: grouped(LANGUAGES),
        tones: grouped(TONES),
        types: RewriteType::ALL
            .iter()
            .map(|kind| RewriteTypeOption {
                value: *kind,
                description: kind.description(),
            })
            .collect(),
    })
}
