//! Rate limiting middleware
//!
//! Applies the configured policy for its action to every request, keyed by
//! client IP. Denials are answered with 429 and a `retryAfter` (seconds)
//! field in the JSON body, before the inner service runs - a denied request
//! has no side effects.

use crate::server::state::AppState;
use crate::utils::error::{ErrorDetail, ErrorResponse};
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpResponse};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Rate limit middleware for actix-web
pub struct RateLimitMiddleware {
    action: String,
}

impl RateLimitMiddleware {
    /// Limit requests under the named action's policy
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
        }
    }
}

impl Default for RateLimitMiddleware {
    fn default() -> Self {
        Self::new("http")
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            action: self.action.clone(),
        }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: S,
    action: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Health checks are exempt so probes cannot starve themselves out
        if req.path() == "/health" {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let state = req.app_data::<web::Data<AppState>>().cloned();
        let decision = state.map(|state| {
            let peer = {
                let info = req.connection_info();
                info.realip_remote_addr().unwrap_or("unknown").to_string()
            };
            let key = format!("ip:{}", peer);
            (peer, state.admission.check_rate(&key, &self.action))
        });

        if let Some((peer, decision)) = decision {
            if !decision.allowed {
                let retry_after = decision
                    .retry_after
                    .map(|d| d.as_secs().max(1))
                    .unwrap_or(1);
                debug!(
                    "Denying {} {} for ip:{} ({}/{} in window)",
                    req.method(),
                    req.path(),
                    peer,
                    decision.count,
                    decision.limit
                );
                let body = ErrorResponse {
                    error: ErrorDetail {
                        code: "RATE_LIMIT_EXCEEDED".to_string(),
                        message: format!(
                            "Rate limit exceeded, retry after {}s",
                            retry_after
                        ),
                        retry_after: Some(retry_after),
                        timestamp: chrono::Utc::now().timestamp(),
                    },
                };
                let response = HttpResponse::TooManyRequests()
                    .insert_header(("Retry-After", retry_after.to_string()))
                    .json(body);
                return Box::pin(async move {
                    Ok(req.into_response(response).map_into_right_body())
                });
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
    }
}
