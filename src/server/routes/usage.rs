//! Usage recording endpoint
//!
//! Callers write one record after a billed operation completes. A failure
//! between the operation and this write under-counts; accounting is
//! at-least-once by design of the calling features, not exactly-once.

use crate::core::budget::UsageRecord;
use crate::server::state::AppState;
use crate::utils::error::AdmissionError;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

/// Request body for POST /v1/usage
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUsageRequest {
    /// User to charge
    pub user_id: Uuid,
    /// Tool that was invoked
    pub tool_name: String,
    /// Estimated cost in USD
    pub cost_estimate: f64,
}

/// POST /v1/usage
pub async fn record(
    state: web::Data<AppState>,
    body: web::Json<RecordUsageRequest>,
) -> Result<HttpResponse, AdmissionError> {
    let request = body.into_inner();

    if request.tool_name.is_empty() {
        return Err(AdmissionError::Validation(
            "toolName is required".to_string(),
        ));
    }
    if !request.cost_estimate.is_finite() || request.cost_estimate < 0.0 {
        return Err(AdmissionError::Validation(
            "costEstimate must be a non-negative number".to_string(),
        ));
    }

    let record = UsageRecord::new(request.user_id, request.tool_name, request.cost_estimate);
    let id = record.id;
    state.usage.record_usage(record).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "recorded": true,
        "id": id,
    })))
}
