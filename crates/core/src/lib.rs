//! Core business logic for tabsplit.
//!
//! This crate contains pure calculation logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `bill` - Even bill splits and tip allocation

pub mod bill;
