//! HTTP layer - axum router, shared state, and request handlers.
//!
//! Routes mirror the public API: CRUD per resource plus order intake and the
//! prescription upload. Handlers stay thin; all behavior lives in
//! [`crate::core`].

/// Request handlers, one module per resource
pub mod handlers;

use axum::{
    Router,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations.
    /// Wrapped in [`Arc`] because `DatabaseConnection` is not `Clone` when
    /// sea-orm's `mock` feature is enabled (it is, via dev-dependencies).
    pub db: Arc<DatabaseConnection>,
    /// Directory uploaded prescription files are written to
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Creates a new `AppState` with the given connection and upload directory.
    #[must_use]
    pub fn new(db: DatabaseConnection, upload_dir: PathBuf) -> Self {
        Self {
            db: Arc::new(db),
            upload_dir,
        }
    }
}

/// Liveness probe at the API root.
async fn home() -> &'static str {
    "Online Pharmacy API is running!"
}

/// Builds the application router with all routes and middleware attached.
///
/// CORS is permissive: the API is consumed by a browser frontend served from
/// elsewhere.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route(
            "/users",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            "/users/:user_id",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        )
        .route(
            "/types",
            post(handlers::medicine_types::create_medicine_type)
                .get(handlers::medicine_types::list_medicine_types),
        )
        .route(
            "/types/:type_id",
            put(handlers::medicine_types::update_medicine_type)
                .delete(handlers::medicine_types::delete_medicine_type),
        )
        .route(
            "/products",
            post(handlers::products::create_product).get(handlers::products::list_products),
        )
        .route(
            "/products/:product_id",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route(
            "/orders",
            post(handlers::orders::place_order).get(handlers::orders::list_orders),
        )
        .route(
            "/orders/:order_id",
            put(handlers::orders::update_order).delete(handlers::orders::delete_order),
        )
        .route(
            "/upload-prescription",
            post(handlers::uploads::upload_prescription),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = setup_test_db().await.unwrap();
        let upload_dir =
            std::env::temp_dir().join(format!("pharmacy-web-test-{}", std::process::id()));
        router(AppState::new(db, upload_dir))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_home_route() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_place_order_returns_order_id() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/orders",
                r#"{"user_id": 1, "total_amount": 19.98,
                    "items": [{"product_id": 1, "quantity": 2, "price": 9.99}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Order placed");
        let order_id = body["order_id"].as_i64().unwrap();

        // The placed order shows up in the listing with status Pending
        let response = app
            .oneshot(Request::builder().uri("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let orders = body_json(response).await;
        assert_eq!(orders[0]["id"].as_i64().unwrap(), order_id);
        assert_eq!(orders[0]["status"], "Pending");
    }

    #[tokio::test]
    async fn test_place_order_missing_required_field_is_client_error() {
        let app = test_app().await;

        // No user_id: typed extraction rejects it before any handler runs
        let response = app
            .oneshot(json_request(
                "POST",
                "/orders",
                r#"{"total_amount": 19.98, "items": []}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_order_rejects_non_allow_listed_field() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/orders",
                r#"{"user_id": 1, "total_amount": 5.0, "items": []}"#,
            ))
            .await
            .unwrap();
        let order_id = body_json(response).await["order_id"].as_i64().unwrap();

        // user_id is not mutable through a PUT
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/orders/{order_id}"),
                r#"{"user_id": 2}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_missing_order_is_404() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "PUT",
                "/orders/999",
                r#"{"status": "Shipped"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_user_crud_round() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/users",
                r#"{"username": "alice", "email": "alice@example.com",
                    "password": "pw", "role": "customer"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let users = body_json(response).await;
        assert_eq!(users[0]["username"], "alice");
        let user_id = users[0]["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/users/{user_id}"),
                r#"{"role": "admin"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/users/{user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_prescription_multipart() {
        let app = test_app().await;

        let body = concat!(
            "--BOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"file\"; filename=\"rx.pdf\"\r\n",
            "Content-Type: application/pdf\r\n\r\n",
            "fake pdf bytes\r\n",
            "--BOUNDARY--\r\n"
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload-prescription")
                    .header(
                        header::CONTENT_TYPE,
                        "multipart/form-data; boundary=BOUNDARY",
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Uploaded successfully");
        assert!(body["path"].as_str().unwrap().ends_with("rx.pdf"));
    }

    #[tokio::test]
    async fn test_upload_prescription_without_file_is_400() {
        let app = test_app().await;

        let body = concat!(
            "--BOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"notes\"\r\n\r\n",
            "no file here\r\n",
            "--BOUNDARY--\r\n"
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/upload-prescription")
                    .header(
                        header::CONTENT_TYPE,
                        "multipart/form-data; boundary=BOUNDARY",
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No file provided");
    }
}
