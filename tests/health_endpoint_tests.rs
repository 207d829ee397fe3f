// tests/health_endpoint_tests.rs
mod common;
use common::*;

use actix_web::{http::StatusCode, test, App};
use orders_service::web::configure_app_routes;

#[actix_web::test]
async fn test_health_returns_ok_without_a_database() {
  setup_tracing();
  // The state points at an unreachable database; the probe must not care.
  let app = test::init_service(
    App::new()
      .app_data(app_state(unreachable_config()))
      .configure(configure_app_routes),
  )
  .await;

  let req = test::TestRequest::get().uri("/health").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body, serde_json::json!({ "status": "ok" }));
}
