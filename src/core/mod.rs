//! Core library components.
//!
//! Registry access, the parsed domain types, and the validation checks that
//! run over them.

pub mod config;
pub mod constants;
pub mod domain;
pub mod registry;
pub mod validation;
