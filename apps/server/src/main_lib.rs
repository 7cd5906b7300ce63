use std::sync::Arc;

use pricewire_market_data::{MarketDataProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
}

pub fn init_tracing() {
    let log_format = std::env::var("PW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state() -> anyhow::Result<Arc<AppState>> {
    let provider = YahooProvider::new().await?;
    Ok(Arc::new(AppState {
        provider: Arc::new(provider),
    }))
}
