use actix_web::http::header::LOCATION;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::{json, Value};
use tera::Context;
use uuid::Uuid;
use log::{debug, info, warn, error};

use crate::auth::AuthState;
use crate::upstream::normalize;
use crate::web::errors::ApiError;
use crate::web::models::ChatResponse;
use crate::AppState;

const API_CHAT_PATH: &str = "/api/chat";

// Root redirects to the chat page
pub async fn index() -> impl Responder {
    HttpResponse::Found()
        .insert_header((LOCATION, "/chat"))
        .finish()
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat page shell, gated on the identity provider's session
pub async fn chat_page(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let redirect_to = match AuthState::from_request(&req, &data.settings) {
        AuthState::SignedIn { .. } => None,
        AuthState::SignedOut { redirect_to } => Some(redirect_to),
    };

    if let Some(target) = redirect_to {
        info!("No session on {}, redirecting to sign-in", req.path());
        return HttpResponse::Found()
            .insert_header((LOCATION, target))
            .finish();
    }

    let mut context = Context::new();
    context.insert("api_path", API_CHAT_PATH);
    match data.tera.render("chat.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Chat API endpoint: relay one query upstream and normalize the answer
pub async fn chat(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    let query = parse_query(&body).map_err(|e| {
        warn!("Rejected chat request {}: {:?}", request_id, e);
        e
    })?;

    info!("Chat request {} ({} bytes)", request_id, query.len());
    debug!("Chat request {} query: {}", request_id, query);

    let reply = data.upstream.query(&query).await.map_err(|e| {
        error!("Upstream error for chat request {}: {}", request_id, e);
        ApiError::from(e)
    })?;

    let answer = normalize::resolve_answer(&reply.content_type, &reply.raw);
    info!("Chat request {} answered (upstream status {})", request_id, reply.status);

    Ok(HttpResponse::Ok().json(ChatResponse { answer }))
}

/// Pull a non-empty `query` string out of the inbound body.
fn parse_query(body: &[u8]) -> Result<String, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Upstream(e.to_string()))?;

    match value.get("query") {
        Some(Value::String(query)) if !query.is_empty() => Ok(query.clone()),
        _ => Err(ApiError::MissingQuery),
    }
}
