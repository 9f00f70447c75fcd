use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{
    auth::{Claims, JwtService},
    errors::AppError,
};

/// Guards a scope: every request must carry a valid bearer access token.
/// On success the decoded [`Claims`] are stored in the request extensions
/// for the [`AuthenticatedUser`] extractor.
pub struct AuthMiddleware;

fn authenticate(req: &ServiceRequest) -> Result<Claims, Error> {
    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| ErrorUnauthorized("Authentication is not configured"))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ErrorUnauthorized("Missing or malformed authorization header"))?;

    jwt_service
        .validate_token(token)
        .map_err(|_| ErrorUnauthorized("Invalid or expired token"))
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            inner: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    inner: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(inner);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let inner = Rc::clone(&self.inner);
        let outcome = authenticate(&req);

        Box::pin(async move {
            let claims = outcome?;
            req.extensions_mut().insert(claims);

            let res = inner.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Handler-side view of the authenticated caller. Only valid inside a scope
/// wrapped with [`AuthMiddleware`].
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();
        ready(
            claims
                .map(AuthenticatedUser)
                .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string())),
        )
    }
}
