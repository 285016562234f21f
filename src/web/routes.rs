use actix_web::web;
use crate::web::handlers;

/// Inbound body cap for `/api`; well above actix's 256 KiB default so long
/// queries are relayed instead of rejected before reaching the handler.
pub const MAX_CHAT_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::PayloadConfig::new(MAX_CHAT_BODY_BYTES))
            .route("/chat", web::post().to(handlers::chat))
    )
    .route("/", web::get().to(handlers::index))
    .route("/chat", web::get().to(handlers::chat_page))
    .route("/health", web::get().to(handlers::health_check));
}
