//! Quote engine module for MoveVan.
//!
//! Deterministic trip pricing plus the quote-to-booking lifecycle. The React
//! site calls this module via HTTP/JSON for every quote operation.

pub mod calculators;
pub mod engine;
pub mod holidays;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tariff;
pub mod zones;

// Re-export commonly used items
pub use calculators::round_money;
pub use engine::QuoteEngine;
pub use routes::router;
pub use services::QuoteError;
pub use tariff::Tariff;
