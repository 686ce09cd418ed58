pub mod app_config;
pub mod config;
pub mod orders;
pub mod outcome;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use orders::{Charge, InvoiceDetails, Order, OrderStub};
pub use outcome::SyncOutcome;
