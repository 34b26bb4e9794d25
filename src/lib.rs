//! zhop - jump target discovery for editor hint motions
//!
//! Module layout:
//! - core: display cell / char / byte conversions
//! - kernel::jump: line scanner, scorer, target aggregation
//! - kernel::services: ports (contracts) and adapters (matchers, providers, settings)

pub mod core;
pub mod kernel;
