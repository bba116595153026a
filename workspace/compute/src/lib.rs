pub mod cashback;
pub mod error;

pub use cashback::{CashbackAnalyticsProvider, CashbackDataProvider, CashbackLedger};
