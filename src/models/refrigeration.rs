//! Refrigeration system models.
//!
//! This module contains models for sizing walk-in and wine-cellar
//! refrigeration: choosing a condensing unit and evaporator from catalogs,
//! and estimating where the chosen pair will operate.

pub mod balance_point;
pub mod selection;
