pub mod bank;
pub mod error;
pub mod routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

async fn read_root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Bank API.",
    }))
}

pub fn create_app() -> Router {
    Router::new()
        .route("/", get(read_root))
        .nest("/api", routes::accounts::accounts_routes())
        .nest("/api", routes::tx::tx_routes())
}
