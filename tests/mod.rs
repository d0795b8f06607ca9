//! Test suite for Show Auth
//!
//! This module organizes all tests

#[macro_use]
pub mod common;
#[cfg(feature = "ssr")]
pub mod property;
