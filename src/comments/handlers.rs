use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::assert_authorized;
use crate::db::Store;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub username: String,
    pub body: String,
}

pub async fn list(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    assert_authorized(&state.settings.auth.app_secret, &req)?;

    let comments = state.store.list_comments().await?;
    Ok(HttpResponse::Ok().json(comments))
}

pub async fn create(
    req: HttpRequest,
    payload: web::Json<CommentRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let subject = assert_authorized(&state.settings.auth.app_secret, &req)?;
    info!("User {} creating comment as {}", subject, payload.username);

    // BadRequest/ServerError from the store pass through unchanged.
    let comment = state
        .store
        .create_comment(&payload.username, &payload.body)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

pub async fn delete(
    req: HttpRequest,
    id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let subject = assert_authorized(&state.settings.auth.app_secret, &req)?;

    let id = id.into_inner();
    info!("User {} deleting comment {}", subject, id);

    // Deletion failures are absorbed into `false` by the store; there is
    // no error path here beyond the guard.
    let deleted = state.store.delete_comment(id).await;
    Ok(HttpResponse::Ok().json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;

    use crate::auth::token;
    use crate::config::Settings;
    use crate::cowsay::MockRenderer;
    use crate::db::store::MockStore;
    use crate::db::Comment;

    fn state_with_store(store: MockStore) -> web::Data<AppState> {
        let settings = Settings::new_for_test().unwrap();
        web::Data::new(AppState::with_parts(
            settings,
            Arc::new(store),
            Arc::new(MockRenderer::new()),
        ))
    }

    fn authed_request(state: &web::Data<AppState>) -> HttpRequest {
        let token = token::issue("alice", &state.settings.auth.app_secret, 1).unwrap();
        TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request()
    }

    #[actix_web::test]
    async fn test_list_requires_token() {
        let store = MockStore::new();
        let state = state_with_store(store);
        let req = TestRequest::default().to_http_request();

        let err = list(req, state).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_list_returns_comments() {
        let mut store = MockStore::new();
        store.expect_list_comments().returning(|| {
            Ok(vec![
                Comment::new("user1".to_string(), "comment1".to_string()),
                Comment::new("user2".to_string(), "comment2".to_string()),
            ])
        });
        let state = state_with_store(store);
        let req = authed_request(&state);

        let resp = list(req, state).await.unwrap();
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let comments: Vec<Comment> = serde_json::from_slice(&body).unwrap();
        assert_eq!(comments.len(), 2);
    }

    #[actix_web::test]
    async fn test_list_empty_store_returns_empty_array() {
        let mut store = MockStore::new();
        store.expect_list_comments().returning(|| Ok(Vec::new()));
        let state = state_with_store(store);
        let req = authed_request(&state);

        let resp = list(req, state).await.unwrap();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let comments: Vec<Comment> = serde_json::from_slice(&body).unwrap();
        assert!(comments.is_empty());
    }

    #[actix_web::test]
    async fn test_create_returns_comment() {
        let mut store = MockStore::new();
        store
            .expect_create_comment()
            .returning(|username, body| Ok(Comment::new(username.to_string(), body.to_string())));
        let state = state_with_store(store);
        let req = authed_request(&state);
        let payload = web::Json(CommentRequest {
            username: "alice".to_string(),
            body: "hi".to_string(),
        });

        let resp = create(req, payload, state).await.unwrap();
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let comment: Comment = serde_json::from_slice(&body).unwrap();
        assert_eq!(comment.username, "alice");
        assert_eq!(comment.body, "hi");
    }

    #[actix_web::test]
    async fn test_create_propagates_bad_request() {
        let mut store = MockStore::new();
        store
            .expect_create_comment()
            .returning(|_, _| Err(AppError::BadRequest("Unable to save comment".to_string())));
        let state = state_with_store(store);
        let req = authed_request(&state);
        let payload = web::Json(CommentRequest {
            username: "alice".to_string(),
            body: "hi".to_string(),
        });

        let err = create(req, payload, state).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[actix_web::test]
    async fn test_create_propagates_server_error() {
        let mut store = MockStore::new();
        store
            .expect_create_comment()
            .returning(|_, _| Err(AppError::ServerError("connection refused".to_string())));
        let state = state_with_store(store);
        let req = authed_request(&state);
        let payload = web::Json(CommentRequest {
            username: "alice".to_string(),
            body: "hi".to_string(),
        });

        let err = create(req, payload, state).await.unwrap_err();
        assert!(matches!(err, AppError::ServerError(_)));
    }

    #[actix_web::test]
    async fn test_create_requires_token_before_store_access() {
        // No expectation on the mock: a store call would panic the test.
        let store = MockStore::new();
        let state = state_with_store(store);
        let req = TestRequest::default().to_http_request();
        let payload = web::Json(CommentRequest {
            username: "alice".to_string(),
            body: "hi".to_string(),
        });

        let err = create(req, payload, state).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn test_delete_reports_store_outcome() {
        let mut store = MockStore::new();
        store.expect_delete_comment().returning(|_| false);
        let state = state_with_store(store);
        let req = authed_request(&state);

        let resp = delete(req, web::Path::from(uuid::Uuid::new_v4()), state)
            .await
            .unwrap();
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let deleted: bool = serde_json::from_slice(&body).unwrap();
        assert!(!deleted);
    }

    #[actix_web::test]
    async fn test_delete_requires_token() {
        let store = MockStore::new();
        let state = state_with_store(store);
        let req = TestRequest::default().to_http_request();

        let err = delete(req, web::Path::from(uuid::Uuid::new_v4()), state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
