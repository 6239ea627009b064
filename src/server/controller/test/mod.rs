//! HTTP tests driving the full router with an in-memory database and session store.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{router::router, state::AppState, template, util::password::hash_password};


const PASSWORD: &str = "secret123";

/// Test application: the real router over a fresh in-memory database.
struct TestApp {
    test: TestContext,
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    headers: axum::http::HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }

    fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();

        let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        store.migrate().await.unwrap();

        let templates = Arc::new(template::environment().unwrap());
        let router = router()
            .with_state(AppState::new(db, templates))
            .layer(SessionManagerLayer::new(store).with_secure(false));

        Self { test, router }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, cookie, None).await
    }

    async fn post(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, cookie, Some(body)).await
    }

    async fn patch(&self, uri: &str, cookie: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::PATCH, uri, cookie, Some(body)).await
    }

    async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, cookie, None).await
    }

    /// Creates an account with the shared test password.
    async fn user(&self, email: &str, admin: bool) -> entity::user::Model {
        factory::user::UserFactory::new(self.db())
            .email(email)
            .password_hash(hash_password(PASSWORD).unwrap())
            .admin(admin)
            .build()
            .await
            .unwrap()
    }

    /// Logs in through the API and returns the session cookie pair.
    async fn login(&self, email: &str) -> String {
        let response = self
            .post(
                "/api/auth/login",
                None,
                serde_json::json!({ "email": email, "password": PASSWORD }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);

        session_cookie(&response).unwrap()
    }
}

/// Extracts `name=value` from the response's Set-Cookie header.
fn session_cookie(response: &TestResponse) -> Option<String> {
    let header = response.headers.get(header::SET_COOKIE)?.to_str().ok()?;

    header.split(';').next().map(str::to_string)
}
