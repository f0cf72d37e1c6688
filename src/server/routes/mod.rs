//! HTTP route handlers

pub mod admission;
pub mod budget;
pub mod health;
pub mod usage;

use actix_web::web;

/// Wire all routes into the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health::health_check)))
        .service(
            web::scope("/v1")
                .service(
                    web::resource("/admission/check").route(web::post().to(admission::check)),
                )
                .service(web::resource("/usage").route(web::post().to(usage::record)))
                .service(
                    web::resource("/budget/{user_id}").route(web::get().to(budget::status)),
                ),
        );
}
