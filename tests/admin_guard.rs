use std::{collections::HashMap, sync::Arc};

use axum::{
    Form, Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value, json};
use storefront_gateway::{
    backend::BackendClient,
    cart::CartStore,
    dto::auth::LoginRequest,
    error::AppError,
    middleware::auth::AdminSession,
    models::AdminUser,
    services::{admin_service, auth_service},
    state::AppState,
};
use tempfile::tempdir;

const GOOD_TOKEN: &str = "test-token";

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {GOOD_TOKEN}"))
        .unwrap_or(false)
}

async fn login(Form(form): Form<HashMap<String, String>>) -> Result<Json<Value>, StatusCode> {
    if form.get("username").map(String::as_str) == Some("admin@example.com")
        && form.get("password").map(String::as_str) == Some("secret")
    {
        Ok(Json(json!({ "access_token": GOOD_TOKEN })))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn me(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if bearer_ok(&headers) {
        Ok(Json(json!({ "id": 1, "email": "admin@example.com" })))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn stats(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if bearer_ok(&headers) {
        Ok(Json(json!({
            "products": 4,
            "categories": 2,
            "orders": 7,
            "pending_orders": 3,
            "contacts": 5,
        })))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn setup() -> anyhow::Result<(AppState, tempfile::TempDir)> {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/admin/stats", get(stats));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let dir = tempdir()?;
    let state = AppState {
        backend: BackendClient::new(format!("http://{addr}")),
        carts: Arc::new(CartStore::open(dir.path().join("carts.json"))),
    };
    Ok((state, dir))
}

#[tokio::test]
async fn login_returns_backend_issued_token() -> anyhow::Result<()> {
    let (state, _dir) = setup().await?;

    let resp = auth_service::login(
        &state,
        LoginRequest {
            email: "admin@example.com".into(),
            password: "secret".into(),
        },
    )
    .await?;
    assert_eq!(resp.data.unwrap().access_token, GOOD_TOKEN);
    Ok(())
}

#[tokio::test]
async fn bad_credentials_do_not_yield_a_token() -> anyhow::Result<()> {
    let (state, _dir) = setup().await?;

    let err = auth_service::login(
        &state,
        LoginRequest {
            email: "admin@example.com".into(),
            password: "wrong".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn valid_token_resolves_identity() -> anyhow::Result<()> {
    let (state, _dir) = setup().await?;

    let user = auth_service::authorize(&state, GOOD_TOKEN).await?;
    assert_eq!(user.email, "admin@example.com");
    Ok(())
}

#[tokio::test]
async fn invalid_token_is_unauthorized() -> anyhow::Result<()> {
    let (state, _dir) = setup().await?;

    let err = auth_service::authorize(&state, "expired-or-garbage")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn upstream_401_on_admin_request_surfaces_as_unauthorized() -> anyhow::Result<()> {
    let (state, _dir) = setup().await?;

    // A session whose token the backend has since invalidated.
    let session = AdminSession {
        token: "revoked".into(),
        user: AdminUser {
            id: 1,
            email: "admin@example.com".into(),
        },
    };

    let err = admin_service::dashboard_stats(&state, &session)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn stats_pass_through_for_valid_session() -> anyhow::Result<()> {
    let (state, _dir) = setup().await?;

    let session = AdminSession {
        token: GOOD_TOKEN.into(),
        user: AdminUser {
            id: 1,
            email: "admin@example.com".into(),
        },
    };

    let stats = admin_service::dashboard_stats(&state, &session)
        .await?
        .data
        .unwrap();
    assert_eq!(stats.orders, 7);
    assert_eq!(stats.pending_orders, 3);
    Ok(())
}
