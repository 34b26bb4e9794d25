//! Services layer (ports + adapters).
//!
//! - `ports`: contracts shared with the host editor (matchers, windows,
//!   mapping tables, options).
//! - `adapters`: concrete implementations of those contracts.

pub mod adapters;
pub mod ports;
