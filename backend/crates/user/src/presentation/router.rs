//! User Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::UserConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UserAppState};

/// Create the User router with PostgreSQL repository
pub fn user_router(repo: PgUserRepository, config: UserConfig) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic User router for any repository implementation
pub fn user_router_generic<U>(repo: U, config: UserConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UserAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_users::<U>).post(handlers::create_user::<U>),
        )
        .route(
            "/{id}",
            get(handlers::get_user::<U>)
                .put(handlers::update_user::<U>)
                .delete(handlers::delete_user::<U>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryUserRepository;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().nest(
            "/api/users",
            user_router_generic(MemoryUserRepository::new(), UserConfig::fast_hashing()),
        )
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_crud_lifecycle() {
        let app = app();

        let res = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/users",
                json!({"email": "a@x.com", "password": "secret", "name": "Ada"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let created = body_json(res).await;
        assert!(created.get("password").is_none());
        assert!(created.get("passwordHash").is_none());
        let id = created["id"].as_str().unwrap().to_string();

        let res = app
            .clone()
            .oneshot(empty_request(Method::GET, &format!("/api/users/{id}")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["email"], "a@x.com");

        let res = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/users/{id}"),
                json!({"name": "Ada L."}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["name"], "Ada L.");

        let res = app
            .clone()
            .oneshot(empty_request(Method::GET, "/api/users"))
            .await
            .unwrap();
        assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);

        let res = app
            .clone()
            .oneshot(empty_request(Method::DELETE, &format!("/api/users/{id}")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["id"], id.as_str());

        let res = app
            .oneshot(empty_request(Method::GET, &format!("/api/users/{id}")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_bad_request() {
        let app = app();
        let body = json!({"email": "a@x.com", "password": "secret"});

        let res = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/users", body.clone()))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = app
            .oneshot(json_request(Method::POST, "/api/users", body))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(res).await["detail"],
            "User with this email already exists"
        );
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request() {
        let res = app()
            .oneshot(empty_request(Method::GET, "/api/users/42"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_fields_is_bad_request() {
        let res = app()
            .oneshot(json_request(Method::POST, "/api/users", json!({"name": "x"})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unreadable_bodies_are_bad_requests() {
        let app = app();

        let res = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/users",
                json!({"email": "a@x.com", "password": 42}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["status"], 400);

        let res = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/users")
                    .body(Body::from(
                        json!({"email": "a@x.com", "password": "secret"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/users",
                json!({"email": "a@x.com", "password": "secret"}),
            ))
            .await
            .unwrap();
        let id = body_json(res).await["id"].as_str().unwrap().to_string();

        let res = app
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/users/{id}"),
                json!({"role": ["admin"]}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
