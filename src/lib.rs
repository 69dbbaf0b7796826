#![doc(test(attr(deny(warnings))))]

//! Insights Core turns a personal finance tracker's flat transaction
//! history into monthly and yearly summaries, category breakdowns, trend
//! series, a heuristic health score, and rule-based suggestions.
//!
//! The engine is pure: it receives a transaction snapshot and setup data
//! as explicit arguments and returns freshly built values. Durability,
//! rendering, and chart wiring stay with the host application.

pub mod config;
pub mod domain;
pub mod errors;
pub mod insights;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Insights Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
