//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! computation logic.
//!
//! # Submodules
//!
//! - [`config`] - Settings file loading and logging setup

pub mod config;
