use actix_web::{web, HttpResponse};
use validator::Validate;

use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};

use crate::dto::LoginRequest;
use crate::handlers::error::ApiResult;
use crate::routes::AppState;

use super::token_response;

/// Handler for POST /api/v1/auth/login
///
/// Unknown login and wrong password both answer 401.
pub async fn login<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    request.validate()?;
    let password = request.password.as_deref().unwrap_or_default();

    let auth = state.auth_service.login(&request.login, password).await?;

    Ok(token_response(auth))
}
