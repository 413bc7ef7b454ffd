use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{
        Extension, Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::dto::ScanResponse;
use crate::app::errors;
use crate::app::services::AppServices;

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

pub async fn scan(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> axum::response::Response {
    tracing::info!("starting barcode scan");

    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => return errors::json_error(e.status(), "invalid_upload", e.body_text()),
    };

    let image = match read_file_field(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_upload",
                format!("missing multipart field `{FILE_FIELD}`"),
            );
        }
        Err(e) => return errors::json_error(e.status(), "invalid_upload", e.body_text()),
    };

    let outcome = match tokio::task::spawn_blocking(move || services.scanner.process(&image)).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => return errors::checkout_error_to_response(e),
        Err(e) => return errors::join_error_to_response(e),
    };

    tracing::info!(total = %outcome.total, "total price of scanned items");
    (StatusCode::OK, Json(ScanResponse::from(outcome))).into_response()
}

async fn read_file_field(multipart: &mut Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            return Ok(Some(field.bytes().await?));
        }
    }
    Ok(None)
}
