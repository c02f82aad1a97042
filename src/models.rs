//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Each model keeps its
//! computation in an internal `core` module and exposes it through a thin
//! [`twine_core::Model`] adapter plus the re-exported core types.

pub mod refrigeration;
