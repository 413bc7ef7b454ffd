use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::header,
    response::IntoResponse,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn generate_qr(
    Extension(services): Extension<Arc<AppServices>>,
    Path(product_id): Path<String>,
) -> axum::response::Response {
    // Catalog read + PNG encode are blocking work.
    let issued = match tokio::task::spawn_blocking(move || services.qr.issue(&product_id)).await {
        Ok(Ok(issued)) => issued,
        Ok(Err(e)) => return errors::checkout_error_to_response(e),
        Err(e) => return errors::join_error_to_response(e),
    };

    ([(header::CONTENT_TYPE, "image/png")], issued.png).into_response()
}
