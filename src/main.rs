use actix_web::{middleware::Logger, App, HttpServer, web::Data};
use actix_files as fs;
use dotenv::dotenv;
use log::{info, error};

use ace_chat::config::Settings;
use ace_chat::web::routes;
use ace_chat::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Ace chat relay");

    let settings = Settings::from_env();
    let bind = (settings.host.clone(), settings.port);
    let static_dir = settings.static_dir.clone();

    // Templates and the upstream client
    let app_state = match AppState::new(settings) {
        Ok(state) => Data::new(state),
        Err(e) => {
            error!("Failed to initialize application state: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Listening on {}:{}", bind.0, bind.1);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", &static_dir))
    })
    .bind(bind)?
    .run()
    .await
}
