//! Application wiring: health, fallback routes, CORS and identity plumbing.

mod common;

use actix_web::{http::header, http::StatusCode, test, web, App, HttpResponse};
use serde_json::Value;

use common::TestContext;
use sharito_api::middleware::AuthContext;

#[actix_web::test]
async fn test_health_reports_healthy_database() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_health_after_close_is_unavailable() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;
    ctx.database().close().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_unknown_route_is_json_not_found() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get().uri("/api/v2/anything").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_cors_exposes_auth_header() {
    let ctx = TestContext::new().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let exposed = resp
        .headers()
        .get(header::ACCESS_CONTROL_EXPOSE_HEADERS)
        .expect("expose headers")
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(exposed.contains("x-auth"));
}

#[actix_web::test]
async fn test_identity_on_unprotected_route_is_server_fault() {
    async fn leaky(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.identity().user_id().to_string())
    }

    let app = test::init_service(App::new().route("/leaky", web::get().to(leaky))).await;

    let req = test::TestRequest::get()
        .uri("/leaky")
        .insert_header(("Authorization", "Bearer whatever"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "internal_error");
}
