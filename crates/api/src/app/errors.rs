use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use scancart_checkout::CheckoutError;

pub fn checkout_error_to_response(err: CheckoutError) -> axum::response::Response {
    match err {
        CheckoutError::CatalogUnavailable(e) => {
            tracing::error!("catalog unavailable: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalog_unavailable", e.to_string())
        }
        CheckoutError::ImageDecode(e) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_image", e.to_string())
        }
        CheckoutError::ProductNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "not_found", "Product not found")
        }
        CheckoutError::InvalidProductId(msg) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
        }
        CheckoutError::TotalOverflow => {
            tracing::warn!("cart total overflow");
            json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "total_overflow",
                "Cart total exceeds the representable range",
            )
        }
        CheckoutError::Render(msg) => {
            tracing::error!("render failed: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "render_failed", msg)
        }
    }
}

/// A blocking task panicked or was cancelled.
pub fn join_error_to_response(err: tokio::task::JoinError) -> axum::response::Response {
    tracing::error!("blocking task failed: {err}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
