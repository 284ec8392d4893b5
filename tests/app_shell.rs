//! Shell routing and page mounting against a stand-in GraphQL endpoint.

use nftmart_sdk::app::Page;
use nftmart_sdk::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_operation(server: &MockServer, operation: &str, data: serde_json::Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": operation })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(server)
        .await;
}

async fn app_for(server: &MockServer) -> App {
    mount_operation(
        server,
        "GetCollections",
        json!({ "collections": { "collections": [{ "id": 1, "name": "Hashmasks" }], "hasMore": false } }),
    )
    .await;
    mount_operation(
        server,
        "GetItems",
        json!({ "assets": { "assets": [
            { "id": 10, "name": "Mask #10", "price": 4, "status": 1, "collectionId": 1 }
        ], "hasMore": false } }),
    )
    .await;
    mount_operation(
        server,
        "GetMyWallet",
        json!({ "user": { "wallet": [{ "id": "w1" }, { "id": "w2" }], "hasMore": false } }),
    )
    .await;
    mount_operation(
        server,
        "GetMyCollections",
        json!({ "collections": { "collections": [{ "categoryId": 3 }], "hasMore": false } }),
    )
    .await;

    App::new(
        NftmartClient::builder()
            .endpoint(&format!("{}/graphql", server.uri()))
            .build(),
    )
}

#[tokio::test]
async fn home_page_loads_collections_and_assets() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;

    let Some(Page::Home(home)) = app.mount_page("#/").await else {
        panic!("expected the home page");
    };
    assert_eq!(home.collections.items()[0].name, "Hashmasks");
    assert_eq!(home.assets.items()[0].name, "Mask #10");
    assert!(!home.assets.has_more());
}

#[tokio::test]
async fn wallet_page_uses_connected_account() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;
    struct Injected;
    impl WalletProvider for Injected {
        async fn accounts(&self) -> Result<Vec<Account>, SdkError> {
            Ok(vec![Account::new("5Alice")])
        }
    }
    app.connect_wallet(&Injected).await.unwrap();

    let Some(Page::Wallet(wallet)) = app.mount_page("/wallet").await else {
        panic!("expected the wallet page");
    };
    assert!(wallet.is_connected());
    assert_eq!(wallet.wallet.data.as_ref().unwrap().wallets.len(), 2);
    assert_eq!(
        wallet.collections.data.as_ref().unwrap().items[0].category_id,
        3
    );
    assert_eq!(
        app.render("/wallet").header.account,
        Some(Address::from("5Alice"))
    );
}

#[tokio::test]
async fn wallet_page_without_account_skips_owned_collections() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;

    let Some(Page::Wallet(wallet)) = app.mount_page("/wallet").await else {
        panic!("expected the wallet page");
    };
    assert!(!wallet.is_connected());
    assert!(wallet.collections.data.is_none());
    assert!(wallet.wallet.data.is_some());
}

#[tokio::test]
async fn unmapped_locations_render_no_page() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;

    for location in ["/wallet/", "/Wallet", "/market", "#/nope"] {
        assert_eq!(app.render(location).route, None, "{location}");
        assert!(app.mount_page(location).await.is_none());
    }
}

#[tokio::test]
async fn unmounted_shell_issues_no_queries() {
    let server = MockServer::start().await;
    let app = app_for(&server).await;
    app.unmount();

    assert!(app.mount_page("/").await.is_none());
    assert!(app.mount_page("/wallet").await.is_none());
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}
