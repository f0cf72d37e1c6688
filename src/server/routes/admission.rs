//! Admission check endpoint

use crate::core::admission::AdmissionRequest;
use crate::server::state::AppState;
use crate::utils::error::AdmissionError;
use actix_web::{web, HttpResponse};

/// POST /v1/admission/check
///
/// Returns the structured decision with a 200 regardless of outcome; the
/// calling handler owns the HTTP status it surfaces to its own client.
pub async fn check(
    state: web::Data<AppState>,
    body: web::Json<AdmissionRequest>,
) -> Result<HttpResponse, AdmissionError> {
    let request = body.into_inner();

    if request.key.is_empty() || request.action.is_empty() {
        return Err(AdmissionError::Validation(
            "key and action are required".to_string(),
        ));
    }
    if let Some(cost) = request.estimated_cost {
        if !cost.is_finite() || cost < 0.0 {
            return Err(AdmissionError::Validation(
                "estimatedCost must be a non-negative number".to_string(),
            ));
        }
    }

    let decision = state.admission.admit(&request).await;
    Ok(HttpResponse::Ok().json(decision))
}
