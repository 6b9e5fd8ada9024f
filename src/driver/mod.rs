//! Top-level driver.
//!
//! This module runs the loop that splits the token stream into top-level
//! forms and hands each parsed form to a backend:
//!
//! - `driver` - The dispatch loop, the `Backend` trait and error recovery
//! - `printer` - A backend that prints every form and registers operators

pub mod driver;
pub mod printer;
