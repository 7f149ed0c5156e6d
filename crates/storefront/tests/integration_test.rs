//! End-to-end tests against a real HTTP catalog served by axum on an ephemeral port.

use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use resource_framework::{FailureKind, ResourceView};
use serde_json::{json, Value};
use std::sync::Arc;
use storefront::clients::{
    Catalog, CatalogError, HttpCatalog, ProductDetailClient, ProductListClient,
};
use storefront::lifecycle::{Storefront, StorefrontConfig, StorefrontError};
use storefront::model::ProductId;
use storefront::navigation::Route;
use storefront::product_detail::{self, DetailView};
use storefront::product_list::{self, ListView, ProductListError};

fn backpack() -> Value {
    json!({
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    })
}

fn tshirt() -> Value {
    json!({
        "id": 2,
        "title": "Mens Casual Premium Slim Fit T-Shirts",
        "price": 22.3,
        "description": "Slim-fitting style, contrast raglan long sleeve.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
        "rating": { "rate": 4.1, "count": 259 }
    })
}

async fn list_products() -> Json<Value> {
    Json(json!([backpack(), tshirt()]))
}

async fn get_product(Path(id): Path<u32>) -> Result<Json<Value>, StatusCode> {
    match id {
        1 => Ok(Json(backpack())),
        2 => Ok(Json(tshirt())),
        // The public catalog answers some unknown ids with `200 null`.
        99 => Ok(Json(Value::Null)),
        _ => Err(StatusCode::NOT_FOUND),
    }
}

fn catalog_router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

async fn spawn_catalog(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind to ephemeral port");
    let addr = listener.local_addr().expect("port");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server run");
    });
    format!("http://{}", addr)
}

fn http_catalog(base_url: &str) -> Arc<dyn Catalog> {
    Arc::new(HttpCatalog::from_url(base_url, "storefront-tests").expect("catalog"))
}

#[tokio::test]
async fn test_list_becomes_ready_with_cards() {
    let base_url = spawn_catalog(catalog_router()).await;
    let mounted = product_list::mount(http_catalog(&base_url)).await.unwrap();
    let client = ProductListClient::new(mounted.client().clone());

    let view = client.settled_view().await.unwrap();
    let ListView::Cards(cards) = &view else {
        panic!("Expected cards, got {:?}", view);
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id, ProductId(1));
    assert_eq!(cards[0].category, "Men's clothing");
    assert_eq!(cards[0].review_count, "(120)");
    assert_eq!(cards[0].price, "$109.95");
    assert_eq!(cards[1].price, "$22.30");

    let text = view.to_string();
    assert!(text.starts_with("App Store\nYour One-Stop Shop for Everything\n"));

    mounted.unmount().await.unwrap();
}

#[tokio::test]
async fn test_list_server_error_shows_generic_message() {
    let router = Router::new().route(
        "/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_catalog(router).await;
    let mounted = product_list::mount(http_catalog(&base_url)).await.unwrap();

    let state = mounted.client().settled().await.unwrap();
    let failure = state.failure().expect("Expected Error phase");
    assert_eq!(failure.kind, FailureKind::Http);
    assert_eq!(failure.message, "Something went wrong");

    mounted.unmount().await.unwrap();
}

#[tokio::test]
async fn test_list_malformed_payload_is_a_parse_failure() {
    let router = Router::new().route("/products", get(|| async { "{\"not\": \"a list\"" }));
    let base_url = spawn_catalog(router).await;
    let mounted = product_list::mount(http_catalog(&base_url)).await.unwrap();

    let state = mounted.client().settled().await.unwrap();
    assert_eq!(state.failure().map(|f| f.kind), Some(FailureKind::Parse));
    assert!(state.data().is_none());

    mounted.unmount().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_catalog_is_a_network_failure() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = http_catalog(&format!("http://{}", addr));
    assert!(matches!(
        catalog.list_products().await,
        Err(CatalogError::Network(_))
    ));

    let mounted = product_list::mount(catalog).await.unwrap();
    let state = mounted.client().settled().await.unwrap();
    assert_eq!(state.failure().map(|f| f.kind), Some(FailureKind::Network));

    mounted.unmount().await.unwrap();
}

#[tokio::test]
async fn test_detail_outcomes() {
    let base_url = spawn_catalog(catalog_router()).await;
    let catalog = http_catalog(&base_url);

    let mounted = product_detail::mount(catalog.clone(), ProductId(2))
        .await
        .unwrap();
    let client = ProductDetailClient::new(mounted.client().clone());
    match client.settled_view().await.unwrap() {
        DetailView::Ready(detail) => {
            assert_eq!(detail.title, "Mens Casual Premium Slim Fit T-Shirts");
            assert_eq!(detail.rating, "4.1 (259 reviews)");
            assert_eq!(detail.price, "$22.30");
        }
        other => panic!("Expected Ready, got {:?}", other),
    }

    // Unknown id answered with 404.
    client.load(ProductId(42)).await.unwrap();
    assert_eq!(
        client.settled_view().await.unwrap(),
        DetailView::Error("Failed to fetch product details".to_string())
    );

    // Unknown id answered with `200 null`.
    client.load(ProductId(99)).await.unwrap();
    assert_eq!(
        client.settled_view().await.unwrap(),
        DetailView::Error("Product not found".to_string())
    );

    client.unmount().await.unwrap();
    mounted.unmount().await.unwrap();
}

#[tokio::test]
async fn test_storefront_browse_flow() {
    let base_url = spawn_catalog(catalog_router()).await;
    let config = StorefrontConfig::from_url(&base_url).unwrap();
    let mut app = Storefront::start(&config).await.unwrap();

    let list = app.settled_render().await.unwrap();
    assert!(list.contains("[2] Mens Casual Premium Slim Fit T-Shirts"));

    let route = app.select(ProductId(2)).await.unwrap();
    assert_eq!(route, Route::ProductDetail { id: ProductId(2) });
    let detail = app.settled_render().await.unwrap();
    assert!(detail.starts_with("< Product Details\n"));
    assert!(detail.contains("Slim-fitting style"));

    assert_eq!(app.back().await.unwrap(), Route::ProductList);
    assert!(app.detail().is_none());
    assert!(app.render().contains("App Store"));

    assert_eq!(
        app.select(ProductId(5)).await,
        Err(StorefrontError::ProductList(ProductListError::UnknownProduct(
            ProductId(5)
        )))
    );

    app.shutdown().await.unwrap();
}
