use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: &'static str,
}

pub async fn root() -> &'static str {
    "Hello, World!"
}

pub async fn api_data() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "Hello From the catalog server",
    })
}
