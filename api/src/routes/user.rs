use actix_web::{web, HttpResponse};

use sharito_core::repositories::{OrderRepository, ProductRepository, UserRepository};

use crate::handlers::error::ApiResult;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/user
///
/// Profile of the authenticated caller.
pub async fn get_user<U, P, O>(
    state: web::Data<AppState<U, P, O>>,
    auth: AuthContext,
) -> ApiResult<HttpResponse>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
{
    let user = state.user_service.get_user(auth.identity()).await?;
    Ok(HttpResponse::Ok().json(user))
}
