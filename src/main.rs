use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use toets_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.gemini_api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; model requests will fail until it is configured");
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::chat)
            .service(handlers::generate_quiz)
            .service(handlers::build_exam_questions)
            .service(handlers::upload_document)
            .service(handlers::health_check)
            .service(handlers::health_check_live)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
