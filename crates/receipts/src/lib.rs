//! Receipt rendering (HTML page and PDF document).
//!
//! Renderers are pure: they take a [`Receipt`] built from a cart snapshot and
//! return bytes. They never touch the cart itself.

pub mod html;
pub mod pdf;
pub mod receipt;

pub use html::render_html;
pub use pdf::{PdfLine, layout_pdf, render_pdf};
pub use receipt::{Receipt, ReceiptError, ReceiptFormat, ReceiptResult};

/// Render a receipt in the requested format.
pub fn render(receipt: &Receipt, format: ReceiptFormat) -> ReceiptResult<Vec<u8>> {
    match format {
        ReceiptFormat::Html => Ok(render_html(receipt).into_bytes()),
        ReceiptFormat::Pdf => render_pdf(receipt),
    }
}
