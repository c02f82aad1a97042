//! Supporting utilities used by models.
//!
//! - [`capacity`]: Linear capacity curves built from rating points.
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`units`]: Conversions between [`uom`] quantities and the °F / BTU/h
//!   working frame used by refrigeration catalogs.

pub mod capacity;
pub mod constraint;
pub mod units;
