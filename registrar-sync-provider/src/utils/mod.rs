//! Utility modules.

/// Registrar date parsing and ISO normalization.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
