//! In-process stand-ins for the upstream service.

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;

use crate::config::Settings;
use crate::web::routes::MAX_CHAT_BODY_BYTES;
use crate::AppState;

struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Option<(String, Value)>>>,
}

async fn canned_reply(data: web::Data<Canned>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    data.hits.fetch_add(1, Ordering::SeqCst);

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let parsed = serde_json::from_slice(&body).unwrap_or(Value::Null);
    *data.received.lock().unwrap() = Some((content_type, parsed));

    HttpResponse::build(data.status)
        .content_type(data.content_type)
        .body(data.body)
}

pub struct MockUpstream {
    pub url: String,
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Option<(String, Value)>>>,
    handle: ServerHandle,
}

impl MockUpstream {
    /// Serve `body` with the given status and content type on `POST /query`.
    /// Must be called from inside an actix runtime.
    pub fn start(status: u16, content_type: &'static str, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(Mutex::new(None));
        let data = web::Data::new(Canned {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body,
            hits: hits.clone(),
            received: received.clone(),
        });

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .app_data(web::PayloadConfig::new(MAX_CHAT_BODY_BYTES))
                .route("/query", web::post().to(canned_reply))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .unwrap()
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            url: format!("http://127.0.0.1:{}/query", port),
            hits,
            received,
            handle,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Content type and JSON body of the last request the upstream saw.
    pub fn received(&self) -> Option<(String, Value)> {
        self.received.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// A URL nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/query", port)
}

pub fn app_state(upstream_url: &str) -> web::Data<AppState> {
    let settings = Settings {
        upstream_url: upstream_url.to_string(),
        ..Settings::default()
    };
    web::Data::new(AppState::new(settings).unwrap())
}
