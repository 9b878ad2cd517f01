//! # Configuration Module
//!
//! This module turns command-line choices into validated conversion options.

pub mod config;
