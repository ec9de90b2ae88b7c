use axum::Json;

pub const SERVICE_NAME: &str = "Bridge POD Management API";

/// GET / — service metadata.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
    }))
}
