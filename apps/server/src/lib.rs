//! Pricewire HTTP server.
//!
//! A thin HTTP front end over the pricewire market data crate: one request
//! handler that validates a stock symbol, resolves the path against a fixed
//! route table and reshapes the fetched price history into the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
