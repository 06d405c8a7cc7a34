//! Core business logic module
//!
//! This module contains the build-order and variant logic. It performs no
//! process spawning - that belongs in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`build_order`] - Build-order script parsing and operation grouping
//! - [`variants`] - Variant list expansion
//! - [`build_type`] - Variant build-type rewriting
//! - [`sequencer`] - Per-variant execution walk

pub mod build_order;
pub mod build_type;
pub mod sequencer;
pub mod variants;
