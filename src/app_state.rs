use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizResultRepository, MongoStudySessionRepository, MongoUserRepository},
    services::{
        GenerationService, OpenAiProvider, QuizResultService, StudySessionService, UserService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub study_session_service: Arc<StudySessionService>,
    pub quiz_result_service: Arc<QuizResultService>,
    pub generation_service: Arc<GenerationService>,
    pub jwt_service: JwtService,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let session_repository = Arc::new(MongoStudySessionRepository::new(&db));
        session_repository.ensure_indexes().await?;
        let study_session_service = Arc::new(StudySessionService::new(session_repository.clone()));

        let result_repository = Arc::new(MongoQuizResultRepository::new(&db));
        result_repository.ensure_indexes().await?;
        let quiz_result_service = Arc::new(QuizResultService::new(
            result_repository,
            session_repository,
        ));

        let provider = Arc::new(OpenAiProvider::new(&config));
        let generation_service = Arc::new(GenerationService::new(provider));

        let jwt_service = JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
            config.refresh_expiration_hours,
        );

        Ok(Self {
            user_service,
            study_session_service,
            quiz_result_service,
            generation_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}
