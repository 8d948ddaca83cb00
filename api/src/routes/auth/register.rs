use actix_web::{web, HttpResponse};
use validator::Validate;

use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};

use crate::dto::RegisterRequest;
use crate::handlers::error::ApiResult;
use crate::routes::AppState;

use super::token_response;

/// Handler for POST /api/v1/auth/register
///
/// # Request Body
///
/// ```json
/// {
///     "login": "alice",
///     "first_name": "Alice",
///     "last_name": "Liddell",
///     "email": "alice@example.com",
///     "password": "secret"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing login or password, malformed email
/// - 409 Conflict: login already registered
pub async fn register<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    request: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let auth = state
        .auth_service
        .register(request.into_registration())
        .await?;

    tracing::info!(user_id = auth.user_id, "Registration succeeded");
    Ok(token_response(auth))
}
