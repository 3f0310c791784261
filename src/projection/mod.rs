//! Per-employee salary projection and expected death outflow calculation

mod cashflows;
mod engine;

pub use cashflows::CashflowRow;
pub use engine::ProjectionEngine;
