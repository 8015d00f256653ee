//! Command handlers.
//!
//! Handlers take their collaborators (probe, event sink, process
//! environment) as arguments and return the text to print.

pub mod env;
pub mod list;
