//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process app on an in-memory database
//! - Request helpers for the auth endpoints
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
#[cfg(feature = "ssr")]
pub mod auth_helpers;

// Re-export commonly used utilities
#[cfg(feature = "ssr")]
pub use auth_helpers::*;
