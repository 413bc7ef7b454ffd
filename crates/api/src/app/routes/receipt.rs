use std::sync::Arc;

use axum::{
    extract::Extension,
    http::header,
    response::{Html, IntoResponse},
};

use scancart_receipts::ReceiptFormat;

use crate::app::errors;
use crate::app::services::AppServices;

const PDF_DISPOSITION: &str = "attachment; filename=\"receipt.pdf\"";

pub async fn receipt_html(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let bytes = match services.receipts.render(ReceiptFormat::Html) {
        Ok(b) => b,
        Err(e) => return errors::checkout_error_to_response(e),
    };
    Html(bytes).into_response()
}

pub async fn receipt_pdf(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let rendered = tokio::task::spawn_blocking(move || services.receipts.render(ReceiptFormat::Pdf)).await;
    let bytes = match rendered {
        Ok(Ok(b)) => b,
        Ok(Err(e)) => return errors::checkout_error_to_response(e),
        Err(e) => return errors::join_error_to_response(e),
    };

    tracing::info!(bytes = bytes.len(), "PDF receipt generated");
    (
        [
            (header::CONTENT_TYPE, ReceiptFormat::Pdf.content_type()),
            (header::CONTENT_DISPOSITION, PDF_DISPOSITION),
        ],
        bytes,
    )
        .into_response()
}
