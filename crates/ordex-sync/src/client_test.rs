use super::*;

#[test]
fn order_id_is_extracted_from_the_invoice_link() {
    let href = "https://retail.example/gp/css/summary/print.html?ie=UTF8&orderID=112-1234567-1234567";
    assert_eq!(
        order_id_from_href(href).as_deref(),
        Some("112-1234567-1234567")
    );
}

#[test]
fn link_without_order_id_yields_none() {
    assert_eq!(
        order_id_from_href("https://retail.example/gp/css/summary/print.html"),
        None
    );
    assert_eq!(order_id_from_href("not a url"), None);
}

#[test]
fn purchase_url_joins_base_and_id() {
    let client = SyncClient::new("http://localhost:8080/api/purchases", 5, "ordex-test/0.1")
        .expect("build client");
    assert_eq!(
        client.purchase_url("112-1234567-1234567"),
        "http://localhost:8080/api/purchases/112-1234567-1234567"
    );
}

#[test]
fn trailing_slash_on_base_url_is_normalized() {
    let client = SyncClient::new("http://localhost:8080/api/purchases/", 5, "ordex-test/0.1")
        .expect("build client");
    assert_eq!(client.purchase_url("x"), "http://localhost:8080/api/purchases/x");
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = SyncClient::new("not-a-url", 5, "ordex-test/0.1");
    assert!(
        matches!(result, Err(SyncError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got an Ok or different error"
    );
}
