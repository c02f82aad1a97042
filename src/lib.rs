//! # Refrig Balance
//!
//! Models for pairing a condensing unit with an evaporator in wine-storage
//! refrigeration, and for estimating the balance point of the paired system.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, including the balance-point solver and
//!   catalog selection.
//! - [`support`]: Supporting utilities used by models (linear capacity
//!   curves, numeric constraints, unit conversions).
//!
//! ## Units
//!
//! Refrigeration catalogs rate equipment in degrees Fahrenheit and BTU per
//! hour, and the models work in those units as plain `f64` values. Callers
//! holding [`uom`] quantities convert at the boundary with
//! [`support::units`].
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for solved balance points and
//! selection results, `warn` for rejected solves) and never installs a
//! subscriber itself.

pub mod models;
pub mod support;
