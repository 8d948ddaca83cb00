//! Bearer token authentication middleware for protected endpoints.
//!
//! The middleware reads `Authorization: Bearer <token>`, runs the
//! [`AuthorizationPipeline`] registered as app data and stores the resulting
//! [`Identity`] in the request extensions. Handlers receive it through the
//! [`AuthContext`] extractor. Successful responses carry the caller's id in
//! the `User-ID` header.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
};

use sharito_core::domain::value_objects::Identity;
use sharito_core::services::AuthorizationPipeline;

use crate::handlers::error::ApiError;

const USER_ID_HEADER: &str = "user-id";

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(pipeline) = req.app_data::<web::Data<AuthorizationPipeline>>().cloned() else {
                tracing::error!(path = %req.path(), "Authorization pipeline is not registered");
                return Ok(reject(req, ApiError::MissingIdentity));
            };

            let token = extract_bearer_token(&req);
            let identity = match pipeline.authorize(token.as_deref()) {
                Ok(identity) => identity,
                Err(error) => return Ok(reject(req, ApiError::from(error))),
            };

            req.extensions_mut().insert(identity);

            let mut response = service.call(req).await?;
            response.headers_mut().insert(
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from(identity.user_id()),
            );
            Ok(response.map_into_left_body())
        })
    }
}

/// Short-circuit with the error's response; the inner service never runs
fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
    let response = error.error_response();
    req.into_response(response).map_into_right_body()
}

/// Extracts the token from `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if scheme.eq_ignore_ascii_case("bearer") {
        Some(token.trim().to_string())
    } else {
        None
    }
}

/// Authenticated caller of a protected handler
#[derive(Debug, Clone, Copy)]
pub struct AuthContext(Identity);

impl AuthContext {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Identity>()
            .copied()
            .map(AuthContext)
            .ok_or(ApiError::MissingIdentity);

        ready(result)
    }
}
