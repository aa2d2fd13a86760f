//! HTTP 路由

use actix_web::error::InternalError;
use actix_web::{HttpResponse, get, put, web};
use registrar_sync_core::types::HostRecordInput;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

/// `PUT /dns-records/{domain}` 请求体
#[derive(Debug, Deserialize)]
pub struct UpdateHostsRequest {
    pub records: Vec<HostRecordInput>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let detail = format!("Invalid request: {err}");
        tracing::warn!("{detail}");
        let response = HttpResponse::BadRequest().json(json!({ "detail": detail }));
        InternalError::from_response(err, response).into()
    }))
    .service(fetch_domains)
    .service(get_dns_records)
    .service(update_dns_records);
}

/// Run one sync cycle in the configured mode.
#[get("/fetch-namecheap-domains")]
async fn fetch_domains(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    tracing::info!("Sync triggered over HTTP");
    let summary = state.sync.run().await?;
    Ok(HttpResponse::Ok().json(json!({
        "result": summary.message,
        "summary": summary,
    })))
}

#[get("/dns-records/{domain}")]
async fn get_dns_records(
    state: web::Data<AppState>,
    domain: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let domain = domain.into_inner();
    let records = state
        .dns
        .get_hosts(&domain)
        .await
        .map_err(|e| ApiError::with_context(e, "Failed to fetch DNS records"))?;

    Ok(HttpResponse::Ok().json(json!({
        "domain": domain,
        "count": records.len(),
        "records": records,
    })))
}

#[put("/dns-records/{domain}")]
async fn update_dns_records(
    state: web::Data<AppState>,
    domain: web::Path<String>,
    body: web::Json<UpdateHostsRequest>,
) -> Result<HttpResponse, ApiError> {
    let domain = domain.into_inner();
    let records = body.into_inner().records;
    let result = state
        .dns
        .set_hosts(&domain, &records)
        .await
        .map_err(|e| ApiError::with_context(e, "Failed to update DNS records"))?;

    tracing::info!(
        "Replaced {} host records for {} (success: {})",
        records.len(),
        result.domain,
        result.success
    );
    Ok(HttpResponse::Ok().json(json!({
        "domain": result.domain,
        "success": result.success,
        "records_count": records.len(),
    })))
}
