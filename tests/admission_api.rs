//! HTTP-level tests for the admission API

use actix_web::{test, web, App};
use claimguard::config::{BudgetConfig, Config, LimitPolicy, RateLimitConfig};
use claimguard::core::admission::AdmissionController;
use claimguard::core::budget::{
    BudgetEnforcer, FailurePolicy, MemoryUsageStore, SubscriptionTier,
};
use claimguard::core::rate_limiter::RateLimiter;
use claimguard::server::middleware::RateLimitMiddleware;
use claimguard::server::{routes, AppState};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

fn test_state(http_max: u32, chat_max: u32) -> AppState {
    let rate_limit = RateLimitConfig {
        enabled: true,
        actions: HashMap::from([
            ("http".to_string(), LimitPolicy::new("http", http_max, 60_000)),
            (
                "ai_chat".to_string(),
                LimitPolicy::new("ai_chat", chat_max, 60_000),
            ),
        ]),
        ..RateLimitConfig::default()
    };
    let budget = BudgetConfig {
        tiers: HashMap::from([(SubscriptionTier::Essential, 5.00)]),
        default_limit: 0.0,
    };

    let usage = Arc::new(MemoryUsageStore::new());
    let enforcer = BudgetEnforcer::new(usage.clone(), budget.clone(), FailurePolicy::FailClosed);
    let admission = Arc::new(AdmissionController::new(
        RateLimiter::in_memory(),
        rate_limit.clone(),
        enforcer,
    ));

    let mut config = Config::default();
    config.gateway.rate_limit = rate_limit;
    config.gateway.budget = budget;

    AppState::new(config, admission, usage)
}

#[actix_web::test]
async fn test_admission_check_allows_then_rate_limits() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(1000, 3)))
            .configure(routes::configure),
    )
    .await;

    let body = json!({"key": "ip:1.2.3.4", "action": "ai_chat"});

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/v1/admission/check")
            .set_json(&body)
            .to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp["allowed"], true);
    }

    let req = test::TestRequest::post()
        .uri("/v1/admission/check")
        .set_json(&body)
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["allowed"], false);
    assert_eq!(resp["reason"], "rate_limited");
    assert!(resp["retryAfter"].as_u64().unwrap() >= 1);
}

#[actix_web::test]
async fn test_budget_scenario_over_the_api() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(1000, 1000)))
            .configure(routes::configure),
    )
    .await;

    let user = Uuid::new_v4();

    // Seed $4.90 of existing usage
    let req = test::TestRequest::post()
        .uri("/v1/usage")
        .set_json(json!({"userId": user, "toolName": "ai_chat", "costEstimate": 4.90}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // $0.05 fits under the $5.00 ceiling
    let req = test::TestRequest::post()
        .uri("/v1/admission/check")
        .set_json(json!({
            "key": "ip:1.2.3.4", "action": "ai_chat",
            "userId": user, "tier": "essential",
            "tool": "ai_chat", "estimatedCost": 0.05,
        }))
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["allowed"], true);

    // $0.20 crosses it
    let req = test::TestRequest::post()
        .uri("/v1/admission/check")
        .set_json(json!({
            "key": "ip:1.2.3.4", "action": "ai_chat",
            "userId": user, "tier": "essential",
            "tool": "ai_chat", "estimatedCost": 0.20,
        }))
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["allowed"], false);
    assert_eq!(resp["reason"], "budget_exceeded");

    // Budget status reflects the seeded usage
    let req = test::TestRequest::get()
        .uri(&format!("/v1/budget/{}?tier=essential", user))
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!((resp["periodCostTotal"].as_f64().unwrap() - 4.90).abs() < 1e-9);
    assert_eq!(resp["periodLimit"].as_f64().unwrap(), 5.00);
    assert_eq!(resp["allowed"], true);
}

#[actix_web::test]
async fn test_middleware_returns_429_with_retry_after() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(2, 1000)))
            .wrap(RateLimitMiddleware::default())
            .configure(routes::configure),
    )
    .await;

    let user = Uuid::new_v4();
    let uri = format!("/v1/budget/{}", user);

    for _ in 0..2 {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);
    let retry_header = resp
        .headers()
        .get("Retry-After")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(retry_header.parse::<u64>().unwrap() >= 1);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "RATE_LIMIT_EXCEEDED");
    assert!(body["error"]["retryAfter"].as_u64().unwrap() >= 1);
}

#[actix_web::test]
async fn test_middleware_exempts_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(1, 1000)))
            .wrap(RateLimitMiddleware::default())
            .configure(routes::configure),
    )
    .await;

    for _ in 0..5 {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}

#[actix_web::test]
async fn test_admission_check_rejects_negative_cost() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(1000, 1000)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/admission/check")
        .set_json(json!({
            "key": "ip:1.2.3.4", "action": "ai_chat",
            "userId": Uuid::new_v4(), "estimatedCost": -0.5,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_reports_version() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(1000, 1000)))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["status"], "healthy");
    assert_eq!(resp["service"], "claimguard");
}
