//! Server assembly and run_server entrypoint

use crate::config::Config;
use crate::core::admission::AdmissionController;
use crate::core::budget::{BudgetEnforcer, FailurePolicy, MemoryUsageStore, UsageStore};
use crate::core::rate_limiter::{CounterStore, MemoryCounterStore, RateLimiter};
use crate::server::middleware::RateLimitMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::DatabaseUsageStore;
use crate::utils::error::Result;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("🚀 Starting ClaimGuard admission gateway");

    let config_path = std::env::var("CLAIMGUARD_CONFIG")
        .unwrap_or_else(|_| "config/gateway.yaml".to_string());
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(&config_path).await {
        Ok(config) => config,
        Err(e) => {
            info!("⚠️  Configuration file loading failed, using defaults: {}", e);
            Config::default()
        }
    };

    serve(config).await
}

/// Assemble state and run the HTTP server until shutdown
pub async fn serve(config: Config) -> Result<()> {
    let usage: Arc<dyn UsageStore> = match &config.gateway.database.url {
        Some(url) => Arc::new(DatabaseUsageStore::connect(url).await?),
        None => {
            warn!("No database configured; usage records held in memory and lost on restart");
            Arc::new(MemoryUsageStore::new())
        }
    };

    let counter_store = Arc::new(MemoryCounterStore::new());
    let limiter = RateLimiter::new(counter_store.clone() as Arc<dyn CounterStore>);

    // Billed admissions fail closed; the informational budget endpoint
    // degrades in its handler instead.
    let enforcer = BudgetEnforcer::new(
        usage.clone(),
        config.gateway.budget.clone(),
        FailurePolicy::FailClosed,
    );
    let admission = Arc::new(AdmissionController::new(
        limiter,
        config.gateway.rate_limit.clone(),
        enforcer,
    ));

    spawn_sweep_task(counter_store, &config);

    let host = config.server().host.clone();
    let port = config.server().port;
    let workers = config.server().workers;
    let state = AppState::new(config, admission, usage);

    info!("🌐 Listening on http://{}:{}", host, port);
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /v1/admission/check - Admission decision");
    info!("   POST /v1/usage - Record billed usage");
    info!("   GET  /v1/budget/{{user_id}} - Budget status");

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RateLimitMiddleware::default())
            .configure(routes::configure)
    })
    .bind((host, port))?;

    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server.run().await?;
    info!("Server stopped");
    Ok(())
}

/// Periodically drop idle counter entries so the store stays bounded
fn spawn_sweep_task(store: Arc<MemoryCounterStore>, config: &Config) {
    let interval = Duration::from_secs(config.gateway.rate_limit.sweep_interval_secs.max(1));
    // Anything idle for two full windows can no longer influence a decision
    let max_idle = config.gateway.rate_limit.max_window() * 2;

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await; // first tick completes immediately
        loop {
            ticker.tick().await;
            let removed = store.sweep(max_idle);
            if removed > 0 {
                debug!("Swept {} idle rate-limit entries", removed);
            }
        }
    });
}
