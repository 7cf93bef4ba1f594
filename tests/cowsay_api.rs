mod common;

use std::sync::Arc;

use actix_web::{test, web, App};

use common::{FixedRenderer, MemStore};
use vulnboard_server::cowsay;

#[actix_web::test]
async fn test_cowsay_returns_renderer_output_without_auth() {
    let state = common::test_state_with(
        Arc::new(MemStore::default()),
        Arc::new(FixedRenderer {
            output: "Mocked Cowsay Output\n".to_string(),
        }),
    );
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .route("/cowsay", web::get().to(cowsay::handlers::render)),
    )
    .await;

    let resp = test::TestRequest::get()
        .uri("/cowsay?input=Hello")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Mocked Cowsay Output\n");
}

#[actix_web::test]
async fn test_cowsay_without_query_uses_default_input() {
    let state = common::test_state_with(
        Arc::new(MemStore::default()),
        Arc::new(FixedRenderer {
            output: "moo\n".to_string(),
        }),
    );
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .route("/cowsay", web::get().to(cowsay::handlers::render)),
    )
    .await;

    let resp = test::TestRequest::get()
        .uri("/cowsay")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_cowsay_render_failure_yields_empty_body() {
    // A renderer whose command failed reports the empty string, and the
    // endpoint still answers 200.
    let state = common::test_state();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .route("/cowsay", web::get().to(cowsay::handlers::render)),
    )
    .await;

    let resp = test::TestRequest::get()
        .uri("/cowsay?input=Hello")
        .send_request(&app)
        .await;
    assert_eq!(resp.status(), 200);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}
