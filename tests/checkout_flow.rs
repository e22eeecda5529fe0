use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};
use storefront_gateway::{
    backend::BackendClient,
    cart::CartStore,
    dto::{cart::AddToCartRequest, orders::CheckoutRequest},
    error::AppError,
    services::{cart_service, order_service},
    state::AppState,
};
use tempfile::tempdir;
use uuid::Uuid;

// Stand-in for the external REST backend: serves two products and records
// every order payload it receives.
#[derive(Clone, Default)]
struct Upstream {
    orders: Arc<Mutex<Vec<Value>>>,
    fail_orders: Arc<AtomicBool>,
}

async fn get_product(Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    let (name, price) = match id {
        1 => ("Widget", 1000),
        2 => ("Gadget", 500),
        _ => return Err(StatusCode::NOT_FOUND),
    };
    Ok(Json(json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase(),
        "description": null,
        "price": price,
        "stock": 50,
        "category_id": 1,
        "is_active": true,
        "images": null,
        "created_at": null,
    })))
}

async fn create_order(
    State(upstream): State<Upstream>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if upstream.fail_orders.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut order = payload.clone();
    order["id"] = json!(1);
    order["created_at"] = json!(null);
    upstream.orders.lock().unwrap().push(payload);
    Ok(Json(order))
}

async fn spawn_upstream(upstream: Upstream) -> anyhow::Result<String> {
    let app = Router::new()
        .route("/api/products/{id}", get(get_product))
        .route("/api/orders", post(create_order))
        .with_state(upstream);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(format!("http://{addr}"))
}

async fn setup(upstream: Upstream) -> anyhow::Result<(AppState, tempfile::TempDir)> {
    let base_url = spawn_upstream(upstream).await?;
    let dir = tempdir()?;
    let state = AppState {
        backend: BackendClient::new(base_url),
        carts: Arc::new(CartStore::open(dir.path().join("carts.json"))),
    };
    Ok((state, dir))
}

#[tokio::test]
async fn checkout_posts_pending_order_and_clears_cart() -> anyhow::Result<()> {
    let upstream = Upstream::default();
    let (state, _dir) = setup(upstream.clone()).await?;
    let session = Uuid::new_v4();

    cart_service::add_item(
        &state,
        session,
        AddToCartRequest {
            product_id: 1,
            quantity: 2,
        },
    )
    .await?;
    let view = cart_service::add_item(
        &state,
        session,
        AddToCartRequest {
            product_id: 2,
            quantity: 1,
        },
    )
    .await?;
    let view = view.data.unwrap();
    assert_eq!(view.total, 2500);
    assert_eq!(view.item_count, 3);

    let resp = order_service::submit_order(
        &state,
        session,
        CheckoutRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
        },
    )
    .await?;
    let order = resp.data.unwrap();
    assert_eq!(order.total_amount, 2500);
    assert_eq!(order.status, "pending");

    let recorded = upstream.orders.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["customer_name"], "Jane Doe");
    assert_eq!(recorded[0]["status"], "pending");
    assert_eq!(recorded[0]["items"].as_array().unwrap().len(), 2);
    drop(recorded);

    let after = cart_service::view_cart(&state, session).await?.data.unwrap();
    assert!(after.items.is_empty());
    assert_eq!(after.total, 0);
    Ok(())
}

#[tokio::test]
async fn empty_cart_checkout_is_rejected_before_any_upstream_call() -> anyhow::Result<()> {
    let upstream = Upstream::default();
    let (state, _dir) = setup(upstream.clone()).await?;
    let session = Uuid::new_v4();

    let err = order_service::submit_order(
        &state,
        session,
        CheckoutRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(upstream.orders.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn blank_contact_fields_are_rejected_before_any_upstream_call() -> anyhow::Result<()> {
    let upstream = Upstream::default();
    let (state, _dir) = setup(upstream.clone()).await?;
    let session = Uuid::new_v4();

    cart_service::add_item(
        &state,
        session,
        AddToCartRequest {
            product_id: 1,
            quantity: 1,
        },
    )
    .await?;

    let err = order_service::submit_order(
        &state,
        session,
        CheckoutRequest {
            name: "  ".into(),
            email: "jane@example.com".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(upstream.orders.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn upstream_failure_leaves_cart_untouched() -> anyhow::Result<()> {
    let upstream = Upstream::default();
    let (state, _dir) = setup(upstream.clone()).await?;
    let session = Uuid::new_v4();

    cart_service::add_item(
        &state,
        session,
        AddToCartRequest {
            product_id: 1,
            quantity: 2,
        },
    )
    .await?;

    upstream.fail_orders.store(true, Ordering::SeqCst);

    let err = order_service::submit_order(
        &state,
        session,
        CheckoutRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));

    let view = cart_service::view_cart(&state, session).await?.data.unwrap();
    assert_eq!(view.total, 2000);
    assert_eq!(view.item_count, 2);
    Ok(())
}

#[tokio::test]
async fn adding_unknown_product_is_rejected() -> anyhow::Result<()> {
    let upstream = Upstream::default();
    let (state, _dir) = setup(upstream).await?;
    let session = Uuid::new_v4();

    let err = cart_service::add_item(
        &state,
        session,
        AddToCartRequest {
            product_id: 999,
            quantity: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}
