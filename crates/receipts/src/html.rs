use scancart_core::format_price;

use crate::receipt::Receipt;

/// Render the receipt as a standalone HTML page.
pub fn render_html(receipt: &Receipt) -> String {
    let mut rows = String::new();
    for item in receipt.items() {
        rows.push_str(&format!(
            "      <tr><td class=\"name\">{}</td><td class=\"price\">${}</td></tr>\n",
            escape(&item.name),
            format_price(item.price),
        ));
    }

    let body = if receipt.is_empty() {
        "    <p class=\"empty\">No items scanned.</p>\n".to_string()
    } else {
        format!(
            "    <table class=\"items\">\n      <thead><tr><th>Item</th><th>Price</th></tr></thead>\n      <tbody>\n{rows}      </tbody>\n    </table>\n"
        )
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "  <head>\n",
            "    <meta charset=\"utf-8\">\n",
            "    <title>Shopping Receipt</title>\n",
            "  </head>\n",
            "  <body>\n",
            "    <h1>Shopping Receipt</h1>\n",
            "    <p class=\"issued\">{issued}</p>\n",
            "{body}",
            "    <p class=\"total\">Total: ${total}</p>\n",
            "  </body>\n",
            "</html>\n",
        ),
        issued = receipt.issued_at().format("%Y-%m-%d %H:%M:%S UTC"),
        body = body,
        total = format_price(receipt.total()),
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use scancart_cart::LineItem;
    use scancart_catalog::Product;

    fn receipt(items: Vec<LineItem>) -> Receipt {
        Receipt::new(items, Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()).unwrap()
    }

    #[test]
    fn lists_items_and_total() {
        let html = render_html(&receipt(vec![
            LineItem::from(Product::new("A1", "Pen", dec!(1.5))),
            LineItem::from(Product::new("B2", "Notebook", dec!(3.25))),
        ]));

        assert!(html.contains("<td class=\"name\">Pen</td><td class=\"price\">$1.50</td>"));
        assert!(html.contains("<td class=\"name\">Notebook</td><td class=\"price\">$3.25</td>"));
        assert!(html.contains("Total: $4.75"));
        assert!(html.contains("2026-01-02 03:04:05 UTC"));
        assert!(html.find("Pen").unwrap() < html.find("Notebook").unwrap());
    }

    #[test]
    fn empty_cart_renders_zero_total() {
        let html = render_html(&receipt(Vec::new()));
        assert!(html.contains("No items scanned."));
        assert!(html.contains("Total: $0.00"));
        assert!(!html.contains("<tr><td"));
    }

    #[test]
    fn names_are_escaped() {
        let html = render_html(&receipt(vec![LineItem::from(Product::new(
            "X",
            "<b>Fish & Chips</b>",
            dec!(5),
        ))]));
        assert!(html.contains("&lt;b&gt;Fish &amp; Chips&lt;/b&gt;"));
        assert!(!html.contains("<b>Fish"));
    }
}
