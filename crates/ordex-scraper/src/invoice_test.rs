use scraper::Html;

use super::*;

const STANDARD_INVOICE: &str = r#"<html><body>
<div data-component="itemTitle"> Stainless Water Bottle </div>
<div data-component="itemTitle">USB-C Cable (2-pack)</div>
<div data-component="itemTitle">USB-C Cable (2-pack)</div>
<div class="od-line-item-row">
  <div class="a-span-last">$12.99</div>
</div>
<div class="od-line-item-row">
  <div class="a-span-last">$31.47</div>
</div>
</body></html>"#;

const SUBSCRIBE_AND_SAVE_INVOICE: &str = r#"<html><body>
<b>Subscribe and Save</b>
<table><tbody>
  <tr><td><b>Items Ordered</b></td></tr>
  <tr><td><i>Coffee Beans 2lb</i></td><td>$14.00</td></tr>
  <tr><td><i>Paper Towels 12ct</i></td><td>$18.99</td></tr>
</tbody></table>
<table><tbody>
  <tr><td><b>Items Ordered</b></td></tr>
  <tr><td><i>Coffee Beans 2lb</i></td><td>$14.00</td></tr>
</tbody></table>
<table><tbody>
  <tr><td><b>Shipping Total: $0.00</b></td></tr>
  <tr><td><b>Order Total: $46.99</b></td></tr>
</tbody></table>
</body></html>"#;

const DIGITAL_INVOICE: &str = r#"<html><body>
<table><tbody><tr>
  <td valign="top">
    The Left Hand of Darkness (Kindle Edition)
  </td>
  <td><span class="a-color-price">$9.99</span></td>
</tr></tbody></table>
</body></html>"#;

#[test]
fn standard_extracts_all_item_titles_in_document_order() {
    let doc = Html::parse_document(STANDARD_INVOICE);
    let details = extract_invoice(&doc, InvoiceLayout::Standard).unwrap();
    // Duplicate titles are distinct line items and must be retained.
    assert_eq!(
        details.items,
        vec![
            "Stainless Water Bottle",
            "USB-C Cable (2-pack)",
            "USB-C Cable (2-pack)",
        ]
    );
}

#[test]
fn standard_price_comes_from_last_line_item_row() {
    let doc = Html::parse_document(STANDARD_INVOICE);
    let details = extract_invoice(&doc, InvoiceLayout::Standard).unwrap();
    assert_eq!(details.price, 31.47);
}

#[test]
fn standard_without_line_item_rows_is_a_missing_anchor() {
    let doc = Html::parse_document(r#"<html><body><div data-component="itemTitle">X</div></body></html>"#);
    let err = extract_invoice(&doc, InvoiceLayout::Standard).unwrap_err();
    assert!(matches!(err, ExtractError::MissingAnchor { .. }), "got: {err:?}");
}

#[test]
fn standard_without_item_titles_is_a_missing_anchor() {
    let doc = Html::parse_document(
        r#"<html><body><div class="od-line-item-row"><div class="a-span-last">$5.00</div></div></body></html>"#,
    );
    let err = extract_invoice(&doc, InvoiceLayout::Standard).unwrap_err();
    assert!(matches!(err, ExtractError::MissingAnchor { .. }), "got: {err:?}");
}

#[test]
fn subscribe_and_save_takes_the_exact_order_total_heading() {
    let doc = Html::parse_document(SUBSCRIBE_AND_SAVE_INVOICE);
    let details = extract_invoice(&doc, InvoiceLayout::SubscribeAndSave).unwrap();
    // "Shipping Total: $0.00" is price-like but must not match the
    // "Order Total: $" prefix.
    assert_eq!(details.price, 46.99);
}

#[test]
fn subscribe_and_save_flattens_items_across_multiple_headings() {
    let doc = Html::parse_document(SUBSCRIBE_AND_SAVE_INVOICE);
    let details = extract_invoice(&doc, InvoiceLayout::SubscribeAndSave).unwrap();
    assert_eq!(
        details.items,
        vec!["Coffee Beans 2lb", "Paper Towels 12ct", "Coffee Beans 2lb"]
    );
}

#[test]
fn subscribe_and_save_without_order_total_is_a_missing_anchor() {
    let doc = Html::parse_document(
        r#"<html><body><table><tbody>
        <tr><td><b>Items Ordered</b></td></tr>
        <tr><td><i>Coffee Beans 2lb</i></td></tr>
        </tbody></table></body></html>"#,
    );
    let err = extract_invoice(&doc, InvoiceLayout::SubscribeAndSave).unwrap_err();
    assert!(matches!(err, ExtractError::MissingAnchor { .. }), "got: {err:?}");
}

#[test]
fn subscribe_and_save_without_items_heading_is_a_missing_anchor() {
    let doc = Html::parse_document(
        r#"<html><body><table><tbody>
        <tr><td><b>Order Total: $9.99</b></td></tr>
        </tbody></table></body></html>"#,
    );
    let err = extract_invoice(&doc, InvoiceLayout::SubscribeAndSave).unwrap_err();
    assert!(matches!(err, ExtractError::MissingAnchor { .. }), "got: {err:?}");
}

#[test]
fn digital_always_yields_exactly_one_item() {
    let doc = Html::parse_document(DIGITAL_INVOICE);
    let details = extract_invoice(&doc, InvoiceLayout::Digital).unwrap();
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.items[0], "The Left Hand of Darkness (Kindle Edition)");
    assert_eq!(details.price, 9.99);
}

#[test]
fn digital_without_price_node_is_a_missing_anchor() {
    let doc = Html::parse_document(r#"<html><body><td valign="top">Book</td></body></html>"#);
    let err = extract_invoice(&doc, InvoiceLayout::Digital).unwrap_err();
    assert!(matches!(err, ExtractError::MissingAnchor { .. }), "got: {err:?}");
}

#[test]
fn unparsable_price_text_is_a_money_error() {
    let doc = Html::parse_document(
        r#"<html><body>
        <div data-component="itemTitle">X</div>
        <div class="od-line-item-row"><div class="a-span-last">FREE</div></div>
        </body></html>"#,
    );
    let err = extract_invoice(&doc, InvoiceLayout::Standard).unwrap_err();
    assert!(matches!(err, ExtractError::Money { .. }), "got: {err:?}");
}
