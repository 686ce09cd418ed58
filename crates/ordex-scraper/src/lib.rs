pub mod charge;
mod dom;
pub mod driver;
pub mod error;
pub mod invoice;
pub mod layout;
pub mod listing;
pub mod money;
pub mod page;

pub use charge::{extract_charge, find_transaction_date, parse_charge_text};
pub use driver::{reconcile_listing, ListingReconciliation, StubOutcome};
pub use error::ExtractError;
pub use invoice::extract_invoice;
pub use layout::{classify, InvoiceLayout};
pub use listing::{find_next_page, scan_listing};
pub use money::parse_money;
pub use page::{Browser, HttpBrowser, OpenedPage};
