use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppResult,
    models::dto::{
        request::{normalize_subject, GenerateSummaryRequest},
        response::{MessageResponse, StudySessionDto, SummaryResponse},
    },
};

/// Generate a summary and persist it as a new study session. The session id
/// in the response is what the quiz endpoint takes later.
#[post("/generate-summary")]
pub async fn generate_summary(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<GenerateSummaryRequest>,
) -> AppResult<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;
    let subject = normalize_subject(&request.subject)?;

    let summary = state
        .generation_service
        .generate_summary(&subject, request.difficulty, request.language)
        .await?;

    let session = state
        .study_session_service
        .create_session(&user.0.sub, &subject, request.difficulty, &summary)
        .await?;

    log::info!(
        "Generated summary for user {} (session {})",
        user.0.sub,
        session.id
    );

    Ok(HttpResponse::Ok().json(SummaryResponse {
        summary,
        session_id: session.id,
    }))
}

#[get("/study-sessions")]
pub async fn list_study_sessions(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let sessions = state.study_session_service.list_sessions(&user.0.sub).await?;

    let dtos: Vec<StudySessionDto> = sessions.into_iter().map(StudySessionDto::from).collect();
    Ok(HttpResponse::Ok().json(dtos))
}

#[delete("/study-sessions/{id}")]
pub async fn delete_study_session(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let session_id = path.into_inner();

    state
        .study_session_service
        .delete_session(&session_id, &user.0.sub)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Study session deleted".to_string(),
    }))
}
