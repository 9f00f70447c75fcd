use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppResult,
    models::dto::{
        request::{normalize_subject, GenerateQuizRequest, SaveQuizResultRequest},
        response::{QuizResponse, QuizResultDto},
    },
};

/// Generate a quiz for an existing study session. Ownership of the session
/// is checked before any completion request is made.
#[post("/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<GenerateQuizRequest>,
) -> AppResult<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;
    let subject = normalize_subject(&request.subject)?;

    state
        .study_session_service
        .get_owned_session(&request.session_id, &user.0.sub)
        .await?;

    let questions = state
        .generation_service
        .generate_quiz(&subject, request.language)
        .await?;

    log::info!(
        "Generated quiz for user {} (session {})",
        user.0.sub,
        request.session_id
    );

    Ok(HttpResponse::Ok().json(QuizResponse { questions }))
}

#[post("/quiz-results")]
pub async fn save_quiz_result(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<SaveQuizResultRequest>,
) -> AppResult<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let result = state
        .quiz_result_service
        .save_result(&user.0.sub, request)
        .await?;

    Ok(HttpResponse::Created().json(QuizResultDto::from(result)))
}

#[get("/quiz-results")]
pub async fn list_quiz_results(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let rows = state.quiz_result_service.list_results(&user.0.sub).await?;
    Ok(HttpResponse::Ok().json(rows))
}
