//! Registration and login endpoints
//!
//! Both answer with the issued token in the `X-Auth` header and in the body.

pub mod login;
pub mod register;

use actix_web::HttpResponse;
use sharito_core::domain::value_objects::AuthResponse;

use crate::dto::TokenResponse;

pub use login::login;
pub use register::register;

pub const AUTH_HEADER: &str = "X-Auth";

fn token_response(auth: AuthResponse) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((AUTH_HEADER, auth.token.clone()))
        .json(TokenResponse { token: auth.token })
}
