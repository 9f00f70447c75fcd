use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppResult,
    models::dto::{
        request::{LoginRequest, RefreshTokenRequest, SignupRequest},
        response::{AuthResponse, MessageResponse, RefreshTokenResponse, UserDto},
    },
};

#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let user = state.user_service.signup(request).await?;

    let access_token = state.jwt_service.create_token(&user)?;
    let refresh_token = state.jwt_service.create_refresh_token(&user.id)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token,
        refresh_token,
        token_type: "bearer".to_string(),
        user: user.into(),
    }))
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let user = state.user_service.login(request).await?;

    let access_token = state.jwt_service.create_token(&user)?;
    let refresh_token = state.jwt_service.create_refresh_token(&user.id)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token,
        refresh_token,
        token_type: "bearer".to_string(),
        user: user.into(),
    }))
}

/// Exchange a valid refresh token for a fresh token pair. The rotated
/// refresh token replaces the old one on the client.
#[post("/auth/refresh")]
pub async fn refresh(
    state: web::Data<AppState>,
    payload: web::Json<RefreshTokenRequest>,
) -> AppResult<HttpResponse> {
    let request = payload.into_inner();
    request.validate()?;

    let claims = state
        .jwt_service
        .validate_refresh_token(&request.refresh_token)?;

    // The account may have been deleted since the token was issued.
    let user = state.user_service.get_user(&claims.sub).await?;

    let access_token = state.jwt_service.create_token(&user)?;
    let refresh_token = state.jwt_service.create_refresh_token(&user.id)?;

    Ok(HttpResponse::Ok().json(RefreshTokenResponse {
        access_token,
        refresh_token,
        token_type: "bearer".to_string(),
    }))
}

#[get("/auth/user")]
pub async fn current_user(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> AppResult<HttpResponse> {
    let user = state.user_service.get_user(&user.0.sub).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

/// Tokens are stateless, so logout is client-side token disposal. The
/// endpoint exists so clients have a uniform call to make.
#[post("/auth/logout")]
pub async fn logout(_user: AuthenticatedUser) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Successfully logged out".to_string(),
    }))
}
