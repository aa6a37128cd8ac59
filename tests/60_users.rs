mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn user_lookup_hides_password() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    server.register("alice", "s3cret").await?;

    let res = server.get("/user/1").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({"id": 1, "username": "alice"}));

    let res = server.get("/user/2").send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_deletes_other_users_but_not_self() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let admin = server.admin_token().await?;
    server.register("bob", "pw").await?;

    let res = server.delete("/user/1").bearer_auth(&admin).send().await?;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "User cannot delete themselves");

    let res = server.delete("/user/2").bearer_auth(&admin).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "User deleted.");

    let res = server.get("/user/2").send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server.delete("/user/2").bearer_auth(&admin).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn non_admin_cannot_delete_users() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    server.admin_token().await?;
    server.register("bob", "pw").await?;
    let (bob, _) = server.login("bob", "pw").await?;

    let res = server.delete("/user/1").bearer_auth(&bob).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = server.get("/user/1").send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
