//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics the parser collects. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of syntax error
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
