//! End-of-run reporting: the glyph summary line and the HTML order
//! summary.
//!
//! Both are cosmetic aggregations over already-settled outcomes; nothing
//! here feeds back into syncing.

use ordex_core::{Charge, SyncOutcome};

/// One reconciled and synced order, ready for reporting.
#[derive(Debug)]
pub struct ReportRow {
    pub order: ordex_core::Order,
    pub outcome: SyncOutcome,
}

/// The one-line run summary: one glyph per processed order, joined by
/// spaces, in input order. Empty input produces an empty summary.
#[must_use]
pub fn glyph_summary(outcomes: &[SyncOutcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| outcome.glyph())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the standalone HTML order summary: every order's items, charge,
/// and price, sorted ascending by price, with chargeless rows flagged.
#[must_use]
pub fn render_summary(rows: &[ReportRow]) -> String {
    let mut sorted: Vec<&ReportRow> = rows.iter().collect();
    sorted.sort_by(|a, b| a.order.price.total_cmp(&b.order.price));

    let body: String = sorted.iter().map(|row| order_html(row)).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Order Summary</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css">
</head>
<body>
<section class="section">
<h1 class="title">Order Summary</h1>
<table class="table is-striped is-fullwidth">
<thead>
<th>Order</th>
<th>Items</th>
<th>Charge</th>
<th>Price</th>
</thead>
<tbody>
{body}
</tbody>
</table>
</section>
</body>
</html>
"#
    )
}

fn order_html(row: &ReportRow) -> String {
    let order = &row.order;
    let class = if order.charge.is_some() {
        ""
    } else {
        "has-background-danger-light"
    };
    let charge = order
        .charge
        .as_ref()
        .map_or_else(|| "-".to_owned(), charge_html);
    format!(
        r#"<tr class="{class}">
<td><a href="{href}" target="_blank">{id}</a> ({glyph})</td>
<td>{items}</td>
<td>{charge}</td>
<td>{price}</td>
</tr>
"#,
        href = order.href,
        id = order.id,
        glyph = row.outcome.glyph(),
        items = items_html(&order.items),
        price = price_html(order.price),
    )
}

fn items_html(items: &[String]) -> String {
    let entries: String = items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect();
    format!("<ul>{entries}</ul>")
}

fn charge_html(charge: &Charge) -> String {
    format!(
        r#"<span class="is-size-7">{}<br>{}<br>{}</span>"#,
        charge.date,
        charge.card,
        price_html(charge.amount)
    )
}

fn price_html(price: f64) -> String {
    format!("${price:.2}")
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
