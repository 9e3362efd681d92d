use axum::{Json, Router, routing::get};
use serde::Serialize;

pub const GREETING: &str = "Hello from FastAPI + Docker + CircleCI!";

#[derive(Serialize)]
pub struct GreetingResponse {
    message: &'static str,
}

pub async fn home() -> Json<GreetingResponse> {
    Json(GreetingResponse { message: GREETING })
}

pub fn router() -> Router {
    Router::new().route("/", get(home))
}
