//! Thermal systems models.
//!
//! This module contains models for the thermal behavior of overhead
//! conductors carrying electrical current.

pub mod conductor;
