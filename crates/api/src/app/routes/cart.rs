use std::sync::Arc;

use axum::{Json, extract::Extension};

use crate::app::dto::MessageResponse;
use crate::app::services::AppServices;

pub async fn clear(Extension(services): Extension<Arc<AppServices>>) -> Json<MessageResponse> {
    services.cart.clear();
    tracing::info!("cart cleared");
    Json(MessageResponse {
        message: "Cart cleared",
    })
}
