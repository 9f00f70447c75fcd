use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mentor_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    handlers::{auth_handler, health_handler, quiz_handler, study_handler},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize application state: {}", e));
    let jwt_service = state.jwt_service.clone();

    log::info!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_handler::health)
            .service(health_handler::health_live)
            .service(health_handler::health_ready)
            .service(auth_handler::signup)
            .service(auth_handler::login)
            .service(auth_handler::refresh)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(auth_handler::current_user)
                    .service(auth_handler::logout)
                    .service(study_handler::generate_summary)
                    .service(study_handler::list_study_sessions)
                    .service(study_handler::delete_study_session)
                    .service(quiz_handler::generate_quiz)
                    .service(quiz_handler::save_quiz_result)
                    .service(quiz_handler::list_quiz_results),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
