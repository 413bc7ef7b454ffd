use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

pub mod cart;
pub mod qr;
pub mod receipt;
pub mod scan;
pub mod system;

/// Router for the point-of-sale endpoints.
pub fn router(upload_limit: DefaultBodyLimit) -> Router {
    Router::new()
        .route("/generate_qr/:product_id", get(qr::generate_qr))
        .route("/scan", post(scan::scan).layer(upload_limit))
        .route("/receipt", get(receipt::receipt_html))
        .route("/receipt/pdf", get(receipt::receipt_pdf))
        .route("/clear", post(cart::clear))
}
