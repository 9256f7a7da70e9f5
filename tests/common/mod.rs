#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use league_api::{config::Config, db, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    // Keeps the database file alive for the test
    _dir: Option<TempDir>,
}

fn config(database_url: Option<String>, vars: &[(&str, &str)]) -> Config {
    Config::from_lookup(|name| match name {
        "DATABASE_URL" => database_url.clone(),
        _ => vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string()),
    })
    .unwrap()
}

impl TestApp {
    pub async fn with_database() -> Self {
        Self::with_database_and(&[]).await
    }

    /// Database-backed app with extra environment variables.
    pub async fn with_database_and(vars: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("league.db").display());
        db::migrate(&url).await.unwrap();

        TestApp {
            router: league_api::app(AppState::new(config(Some(url), vars))),
            _dir: Some(dir),
        }
    }

    pub fn without_database() -> Self {
        Self::without_database_and(&[])
    }

    pub fn without_database_and(vars: &[(&str, &str)]) -> Self {
        TestApp {
            router: league_api::app(AppState::new(config(None, vars))),
            _dir: None,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
        match body {
            Some(json) => self.send_raw(method, uri, &json.to_string()).await,
            None => self.request(Request::builder().method(method).uri(uri), Body::empty()).await,
        }
    }

    pub async fn send_raw(&self, method: &str, uri: &str, body: &str) -> Response<Body> {
        self.send_bytes(method, uri, body.as_bytes().to_vec()).await
    }

    pub async fn send_bytes(&self, method: &str, uri: &str, body: Vec<u8>) -> Response<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        self.request(builder, Body::from(body)).await
    }

    async fn request(&self, builder: axum::http::request::Builder, body: Body) -> Response<Body> {
        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Send a request and return the status with the decoded JSON body.
    pub async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
        decode(self.send(method, uri, body).await).await
    }

    pub async fn json_raw(&self, method: &str, uri: &str, body: &str) -> (u16, Value) {
        decode(self.send_raw(method, uri, body).await).await
    }
}

pub async fn decode(response: Response<Body>) -> (u16, Value) {
    let status = response.status().as_u16();
    let bytes = body_bytes(response).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}
