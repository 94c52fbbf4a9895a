//! Command implementations for the `uigen` CLI.
//!
//! Each command loads its inputs, does its work through the library crates
//! and prints its result in the requested output format.

pub mod completions;
pub mod generate;
pub mod inspect;
