//! Collection of pre-defined drive scenarios.

pub mod rf_drive;
