use axum::{routing::get, Router};

pub const GREETING: &str = "Hello from Node JS with PM2!";

async fn root() -> &'static str {
    GREETING
}

pub fn app() -> Router {
    Router::new().route("/", get(root))
}
