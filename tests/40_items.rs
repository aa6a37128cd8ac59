mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::id_of;

#[tokio::test]
async fn item_lifecycle_and_store_cascade() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.admin_token().await?;
    let store = server.create_store(&token, "My Store").await?;
    let store_id = id_of(&store);

    let item = server.create_item(&token, "Chair", 15.99, store_id).await?;
    assert_eq!(item["name"], "Chair");
    assert_eq!(item["price"], 15.99);
    assert_eq!(item["store"], json!({"id": store_id, "name": "My Store"}));
    assert_eq!(item["tags"], json!([]));
    let item_id = id_of(&item);

    let store: Value = server.get(&format!("/store/{}", store_id)).send().await?.json().await?;
    assert_eq!(store["items"][0]["name"], "Chair");

    let res = server
        .put(&format!("/item/{}", item_id))
        .bearer_auth(&token)
        .json(&json!({"price": 9.5}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["price"], 9.5);
    assert_eq!(body["name"], "Chair");

    let res = server
        .delete(&format!("/store/{}", store_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server
        .get(&format!("/item/{}", item_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn item_reads_need_a_token() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let admin = server.admin_token().await?;
    let store = server.create_store(&admin, "Shop").await?;
    let item = server.create_item(&admin, "Chair", 1.0, id_of(&store)).await?;

    let res = server.get(&format!("/item/{}", id_of(&item))).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Any authenticated user may read
    server.register("bob", "pw").await?;
    let (bob, _) = server.login("bob", "pw").await?;
    let res = server.get(&format!("/item/{}", id_of(&item))).bearer_auth(&bob).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = server.get("/item").bearer_auth(&bob).send().await?;
    let body: Value = res.json().await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let res = server
        .post("/item")
        .bearer_auth(&bob)
        .json(&json!({"name": "Table", "price": 2.0, "store_id": id_of(&store)}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn item_in_missing_store_is_not_found() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.admin_token().await?;

    let res = server
        .post("/item")
        .bearer_auth(&token)
        .json(&json!({"name": "Chair", "price": 1.0, "store_id": 42}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Store not found.");

    let store = server.create_store(&token, "Shop").await?;
    let item = server.create_item(&token, "Chair", 1.0, id_of(&store)).await?;
    let res = server
        .put(&format!("/item/{}", id_of(&item)))
        .bearer_auth(&token)
        .json(&json!({"store_id": 42}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn item_payload_is_validated() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.admin_token().await?;
    let store = server.create_store(&token, "Shop").await?;

    for payload in [
        json!({"name": "Chair", "store_id": id_of(&store)}),
        json!({"name": "Chair", "price": -1.0, "store_id": id_of(&store)}),
        json!({"name": "Chair", "price": "cheap", "store_id": id_of(&store)}),
    ] {
        let res = server.post("/item").bearer_auth(&token).json(&payload).send().await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
    }
    Ok(())
}

#[tokio::test]
async fn deleting_item_reports_message() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let token = server.admin_token().await?;
    let store = server.create_store(&token, "Shop").await?;
    let item = server.create_item(&token, "Chair", 1.0, id_of(&store)).await?;

    let res = server
        .delete(&format!("/item/{}", id_of(&item)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Item deleted.");

    let res = server
        .delete(&format!("/item/{}", id_of(&item)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
