#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{RequestBuilder, StatusCode};
use serde_json::{json, Value};

use store_api::{app, AppConfig, AppState};

/// In-process server backed by its own in-memory database
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let state = AppState::from_config(AppConfig::in_memory()).await?;

        // Port 0 lets the OS hand out a free port for isolation
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("failed to bind test listener")?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.ok();
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<StatusCode> {
        let res = self
            .post("/register")
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;
        Ok(res.status())
    }

    /// Returns `(access_token, refresh_token)`
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, String)> {
        let res = self
            .post("/login")
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

        let body: Value = res.json().await?;
        let access = body["access_token"].as_str().context("missing access_token")?;
        let refresh = body["refresh_token"].as_str().context("missing refresh_token")?;
        Ok((access.to_string(), refresh.to_string()))
    }

    /// First registered user is id 1, which the default config treats as admin
    pub async fn admin_token(&self) -> Result<String> {
        self.register("admin", "admin-password").await?;
        let (access, _) = self.login("admin", "admin-password").await?;
        Ok(access)
    }

    pub async fn create_store(&self, token: &str, name: &str) -> Result<Value> {
        let res = self
            .post("/store")
            .bearer_auth(token)
            .json(&json!({"name": name}))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "create store failed: {}", res.status());
        Ok(res.json().await?)
    }

    pub async fn create_item(&self, token: &str, name: &str, price: f64, store_id: i64) -> Result<Value> {
        let res = self
            .post("/item")
            .bearer_auth(token)
            .json(&json!({"name": name, "price": price, "store_id": store_id}))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "create item failed: {}", res.status());
        Ok(res.json().await?)
    }

    pub async fn create_tag(&self, token: &str, store_id: i64, name: &str) -> Result<Value> {
        let res = self
            .post(&format!("/store/{}/tag", store_id))
            .bearer_auth(token)
            .json(&json!({"name": name}))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "create tag failed: {}", res.status());
        Ok(res.json().await?)
    }
}

pub fn id_of(value: &Value) -> i64 {
    value["id"].as_i64().unwrap_or_default()
}
