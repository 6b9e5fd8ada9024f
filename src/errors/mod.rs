//! Error types and error handling for the front end.
//!
//! This module defines the errors raised while parsing and the error a
//! backend uses to reject a form. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each failure category
//! - Helpful error messages and suggestions

pub mod errors;
