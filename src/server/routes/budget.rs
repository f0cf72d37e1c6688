//! Budget status endpoint

use crate::core::budget::SubscriptionTier;
use crate::server::state::AppState;
use crate::utils::error::AdmissionError;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

/// Query parameters for GET /v1/budget/{user_id}
#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    /// Subscription tier; defaults to free when omitted
    #[serde(default)]
    pub tier: Option<SubscriptionTier>,
}

/// GET /v1/budget/{user_id}
///
/// Informational read, so it fails open: a usage-store outage degrades the
/// response instead of denying it.
pub async fn status(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<BudgetQuery>,
) -> Result<HttpResponse, AdmissionError> {
    let user_id = path.into_inner();
    let tier = query.tier.unwrap_or_default();

    match state.admission.budget_status(user_id, tier).await {
        Ok(status) => Ok(HttpResponse::Ok().json(status)),
        Err(e) => {
            warn!("Budget status read failed for {}: {}", user_id, e);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "allowed": true,
                "degraded": true,
                "error": "upstream_error",
            })))
        }
    }
}
