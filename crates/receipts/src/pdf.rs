//! PDF receipt.
//!
//! Layout is in PDF points from the bottom-left corner: the title sits at
//! y=750, items follow at 20pt steps from y=730, and the total line comes one
//! blank step after the last item. Lines that would cross the bottom margin
//! continue on a new page under a repeated title.

use printpdf::{BuiltinFont, Mm, PdfDocument, PdfLayerReference};

use scancart_core::format_price;

use crate::receipt::{Receipt, ReceiptError, ReceiptResult};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const FONT_SIZE: f32 = 12.0;

const LEFT_X: f32 = 100.0;
const TITLE_Y: f32 = 750.0;
const FIRST_LINE_Y: f32 = 730.0;
const LINE_STEP: f32 = 20.0;
const BOTTOM_MARGIN: f32 = 72.0;

const TITLE: &str = "Shopping Receipt";
const TITLE_CONTINUED: &str = "Shopping Receipt (continued)";

/// One positioned line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLine {
    /// Zero-based page index.
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
}

struct Cursor {
    page: usize,
    y: f32,
    lines: Vec<PdfLine>,
}

impl Cursor {
    fn new() -> Self {
        let mut c = Self {
            page: 0,
            y: FIRST_LINE_Y,
            lines: Vec::new(),
        };
        c.push_at(TITLE_Y, TITLE.to_string());
        c
    }

    fn push_at(&mut self, y: f32, text: String) {
        self.lines.push(PdfLine {
            page: self.page,
            x: LEFT_X,
            y,
            text,
        });
    }

    fn new_page(&mut self) {
        self.page += 1;
        self.y = FIRST_LINE_Y;
        self.push_at(TITLE_Y, TITLE_CONTINUED.to_string());
    }

    fn push_line(&mut self, text: String) {
        if self.y < BOTTOM_MARGIN {
            self.new_page();
        }
        self.push_at(self.y, text);
        self.y -= LINE_STEP;
    }

    fn push_total(&mut self, text: String) {
        let y = self.y - LINE_STEP;
        if y < BOTTOM_MARGIN {
            self.new_page();
            self.push_at(self.y, text);
        } else {
            self.push_at(y, text);
        }
    }
}

/// Compute every text line and its position.
pub fn layout_pdf(receipt: &Receipt) -> Vec<PdfLine> {
    let mut cursor = Cursor::new();
    for item in receipt.items() {
        cursor.push_line(format!("{} - ${}", item.name, format_price(item.price)));
    }
    cursor.push_total(format!("Total: ${}", format_price(receipt.total())));
    cursor.lines
}

fn pt(v: f32) -> Mm {
    Mm(v * 25.4 / 72.0)
}

/// Render the receipt as PDF bytes.
pub fn render_pdf(receipt: &Receipt) -> ReceiptResult<Vec<u8>> {
    let lines = layout_pdf(receipt);
    let page_count = lines.iter().map(|l| l.page + 1).max().unwrap_or(1);

    let (doc, first_page, first_layer) = PdfDocument::new(
        TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReceiptError::Pdf(e.to_string()))?;

    let mut layers: Vec<PdfLayerReference> = vec![doc.get_page(first_page).get_layer(first_layer)];
    for _ in 1..page_count {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        layers.push(doc.get_page(page).get_layer(layer));
    }

    for line in &lines {
        layers[line.page].use_text(line.text.clone(), FONT_SIZE, pt(line.x), pt(line.y), &font);
    }

    doc.save_to_bytes()
        .map_err(|e| ReceiptError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use scancart_cart::LineItem;
    use scancart_catalog::Product;

    fn pens(n: usize) -> Receipt {
        let items = (0..n)
            .map(|i| LineItem::from(Product::new(format!("P{i}"), format!("Pen {i}"), dec!(1.50))))
            .collect();
        Receipt::new(items, Utc::now()).unwrap()
    }

    #[test]
    fn empty_cart_has_title_and_zero_total() {
        let lines = layout_pdf(&pens(0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Shopping Receipt");
        assert_eq!(lines[0].y, 750.0);
        assert_eq!(lines[1].text, "Total: $0.00");
        assert_eq!(lines[1].y, 710.0);
    }

    #[test]
    fn items_step_down_from_top() {
        let lines = layout_pdf(&pens(2));
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Shopping Receipt", "Pen 0 - $1.50", "Pen 1 - $1.50", "Total: $3.00"]
        );
        let ys: Vec<f32> = lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![750.0, 730.0, 710.0, 670.0]);
        assert!(lines.iter().all(|l| l.page == 0 && l.x == 100.0));
    }

    #[test]
    fn long_receipts_continue_on_new_pages() {
        let lines = layout_pdf(&pens(100));

        assert!(lines.iter().all(|l| l.y >= BOTTOM_MARGIN));
        let pages = lines.iter().map(|l| l.page).max().unwrap() + 1;
        assert!(pages >= 3);

        let continued = lines.iter().filter(|l| l.text == TITLE_CONTINUED).count();
        assert_eq!(continued, pages - 1);

        let items = lines.iter().filter(|l| l.text.starts_with("Pen ")).count();
        assert_eq!(items, 100);
        assert_eq!(lines.last().unwrap().text, "Total: $150.00");
    }

    #[test]
    fn renders_pdf_bytes() {
        let bytes = render_pdf(&pens(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn renders_multi_page_pdf_bytes() {
        let bytes = render_pdf(&pens(80)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
